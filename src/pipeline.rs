//! Orchestration of the analysis: one pass per [`Taxonomy`], three reports per pass.

use crate::{
    aggregate, extract, read_trace_file, write_report_file, AnalysisError, EventMap,
    EventStatistics, Grouping, GroupedSeries, Report, ReportPolicy, Taxonomy, TraceBatch,
};
use std::path::{Path, PathBuf};

//=================
// Reports

/// The three reports produced by one taxonomy pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyReports {
    pub taxonomy: Taxonomy,
    pub queue: Report,
    pub handle: Report,
    pub combined: Report,
}

impl TaxonomyReports {
    pub fn get(&self, grouping: Grouping) -> &Report {
        match grouping {
            Grouping::Queue => &self.queue,
            Grouping::Handle => &self.handle,
            Grouping::Combined => &self.combined,
        }
    }
}

/// All reports of a batch, one [`TaxonomyReports`] per entry of [`Taxonomy::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReports {
    /// Number of latency samples the zero-padded means were taken over.
    pub population: usize,
    pub passes: Vec<TaxonomyReports>,
}

impl BatchReports {
    /// Iterates over every report with the taxonomy and grouping it belongs to.
    pub fn iter(&self) -> impl Iterator<Item = (Taxonomy, Grouping, &Report)> {
        self.passes.iter().flat_map(|pass| {
            Grouping::ALL
                .into_iter()
                .map(move |grouping| (pass.taxonomy, grouping, pass.get(grouping)))
        })
    }
}

/// Path of the report for `taxonomy` and `grouping` derived from the trace input at `input`:
/// the input's extension is replaced by the grouping and taxonomy suffixes and `.csv`.
pub fn report_path(input: &Path, taxonomy: Taxonomy, grouping: Grouping) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!(
        "{stem}{}{}.csv",
        grouping.file_suffix(),
        taxonomy.file_suffix()
    );
    input.with_file_name(file_name)
}

//=================
// LatencyBreakdown

/// Entry point of the analysis. Encapsulates the [`ReportPolicy`] applied to every report.
#[derive(Debug, Clone, Default)]
pub struct LatencyBreakdown(ReportPolicy);

impl LatencyBreakdown {
    /// Instantiates a [`LatencyBreakdown`] with the default [`ReportPolicy`].
    pub fn new() -> Self {
        Self(ReportPolicy::default())
    }

    /// Creates a new [`LatencyBreakdown`] configured the same as `self` but with the given `policy`.
    pub fn with_policy(&self, policy: ReportPolicy) -> Self {
        Self(policy)
    }

    pub fn policy(&self) -> &ReportPolicy {
        &self.0
    }

    /// Summarizes every series of `series` against `population`.
    fn summarize_grouping(
        series: &GroupedSeries,
        grouping: Grouping,
        taxonomy: Taxonomy,
        population: usize,
    ) -> Result<EventMap<EventStatistics>, AnalysisError> {
        series
            .get(grouping)
            .try_map_values(|s| EventStatistics::new(s, population))
            .map_err(|(event, source)| AnalysisError::Stats {
                taxonomy,
                grouping,
                event,
                source,
            })
    }

    /// Runs the extraction, aggregation, statistics and ranking stages for one taxonomy.
    pub fn analyze_taxonomy(
        &self,
        batch: &TraceBatch,
        taxonomy: Taxonomy,
    ) -> Result<TaxonomyReports, AnalysisError> {
        log::trace!("entering `analyze_taxonomy` for {taxonomy}");
        if batch.is_empty() {
            return Err(AnalysisError::EmptyBatch);
        }
        let population = batch.population();
        let series = aggregate(extract(batch.samples(), taxonomy));

        let report = |grouping: Grouping| -> Result<Report, AnalysisError> {
            let stats = Self::summarize_grouping(&series, grouping, taxonomy, population)?;
            let report = Report::build(&stats, &self.0);
            log::debug!(
                "{taxonomy} {grouping} report: {} events, {} listed, rollup {:?}",
                report.event_count,
                report.rows.len(),
                report.other
            );
            Ok(report)
        };

        Ok(TaxonomyReports {
            taxonomy,
            queue: report(Grouping::Queue)?,
            handle: report(Grouping::Handle)?,
            combined: report(Grouping::Combined)?,
        })
    }

    /// Produces all reports of `batch`.
    ///
    /// # Errors
    /// - [`AnalysisError::EmptyBatch`] if `batch` holds no samples.
    /// - [`AnalysisError::Stats`] if any event series violates the statistics invariants.
    pub fn analyze(&self, batch: &TraceBatch) -> Result<BatchReports, AnalysisError> {
        let passes = Taxonomy::ALL
            .into_iter()
            .map(|taxonomy| self.analyze_taxonomy(batch, taxonomy))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BatchReports {
            population: batch.population(),
            passes,
        })
    }

    /// Writes every report of `reports` next to `input`, at the path given by [`report_path`],
    /// and returns the paths written.
    pub fn write_reports(
        &self,
        reports: &BatchReports,
        input: &Path,
    ) -> Result<Vec<PathBuf>, AnalysisError> {
        reports
            .iter()
            .map(|(taxonomy, grouping, report)| {
                let path = report_path(input, taxonomy, grouping);
                write_report_file(report, &path)?;
                Ok(path)
            })
            .collect()
    }

    /// Reads the trace file at `input`, analyzes it and writes the six reports next to it.
    /// Nothing is written unless every report could be computed.
    pub fn analyze_file(&self, input: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
        let batch = read_trace_file(input)?;
        log::info!(
            "analyzing {} latency samples from {}",
            batch.population(),
            input.display()
        );
        let reports = self.analyze(&batch)?;
        self.write_reports(&reports, input)
    }
}
