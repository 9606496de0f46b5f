//! CSV serialization of a [`Report`].

use crate::{AnalysisError, Report, ReportRow, OTHER_ROW_NAME};
use std::{
    fs::File,
    io,
    path::Path,
};

/// Header row of every report.
pub const REPORT_HEADER: [&str; 9] = [
    "Name",
    "Mean Across All Latencies",
    "Mean",
    "Median",
    "25th Percentile",
    "75th Percentile",
    "90th Percentile",
    "99th Percentile",
    "Occurrences",
];

/// Marker row written after the rollup row.
pub const OTHER_MARKER: &str = "other:";

fn row_record(row: &ReportRow) -> [String; 9] {
    let ReportRow { name, stats } = row;
    [
        name.clone(),
        stats.padded_mean.to_string(),
        stats.mean.to_string(),
        stats.median.to_string(),
        stats.p25.to_string(),
        stats.p75.to_string(),
        stats.p90.to_string(),
        stats.p99.to_string(),
        stats.occurrences.to_string(),
    ]
}

/// Writes `report` as CSV: the [`REPORT_HEADER`], one record per listed event and, if the report
/// has a rollup, a two-field `other` record, a blank line and an [`OTHER_MARKER`] record.
pub fn write_report<W: io::Write>(report: &Report, writer: W) -> Result<(), csv::Error> {
    let mut builder = csv::WriterBuilder::new();
    builder.flexible(true);
    let mut wtr = builder.from_writer(writer);
    wtr.write_record(REPORT_HEADER)?;
    for row in &report.rows {
        wtr.write_record(row_record(row))?;
    }
    if let Some(other) = report.other {
        wtr.write_record([OTHER_ROW_NAME, other.to_string().as_str()])?;
        // A lone empty field would be quoted, so the blank line bypasses the csv writer.
        let mut inner = wtr.into_inner().map_err(|e| e.into_error())?;
        inner.write_all(b"\n")?;
        wtr = builder.from_writer(inner);
        wtr.write_record([OTHER_MARKER])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `report` to it.
pub fn write_report_file(report: &Report, path: &Path) -> Result<(), AnalysisError> {
    log::trace!("entering `write_report_file` for {}", path.display());
    let write = || -> Result<(), csv::Error> {
        let file = File::create(path)?;
        write_report(report, io::BufWriter::new(file))
    };
    write().map_err(|source| AnalysisError::Write {
        path: path.to_owned(),
        source,
    })
}
