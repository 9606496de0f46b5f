//! Ranking of event statistics into a truncated report.

use crate::{EventMap, EventStatistics};

/// Number of top-ranked events listed individually by default.
pub const DEFAULT_TOP_N: usize = 19;

/// Rank (0-based) from which events are summed into the "other" rollup by default.
///
/// This is one past [`DEFAULT_TOP_N`]: the event at rank 19 is neither listed nor rolled up.
/// Downstream consumers of the reports rely on this layout, so it is kept as is.
pub const DEFAULT_ROLLUP_FROM: usize = 20;

/// Name of the rollup row.
pub const OTHER_ROW_NAME: &str = "other";

/// Controls how many events a [`Report`] lists and which ones it rolls up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPolicy {
    pub(crate) top_n: usize,
    pub(crate) rollup_from: usize,
}

impl Default for ReportPolicy {
    /// Instantiates the default policy: the top [`DEFAULT_TOP_N`] events are listed and events
    /// ranked [`DEFAULT_ROLLUP_FROM`] onward are rolled up.
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            rollup_from: DEFAULT_ROLLUP_FROM,
        }
    }
}

impl ReportPolicy {
    /// Creates a new [`ReportPolicy`] the same as `self` but listing the top `top_n` events.
    pub fn with_top_n(self, top_n: usize) -> Self {
        Self { top_n, ..self }
    }

    /// Creates a new [`ReportPolicy`] the same as `self` but rolling up events from rank
    /// `rollup_from` onward. A rollup row only exists if at least one event has that rank.
    pub fn with_rollup_from(self, rollup_from: usize) -> Self {
        Self {
            rollup_from,
            ..self
        }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn rollup_from(&self) -> usize {
        self.rollup_from
    }
}

/// One listed event of a [`Report`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub stats: EventStatistics,
}

/// Events ranked by descending zero-padded mean.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The top-ranked events, at most [`ReportPolicy::top_n`] of them.
    pub rows: Vec<ReportRow>,
    /// Sum of the zero-padded means of the events ranked [`ReportPolicy::rollup_from`] onward,
    /// `None` if there are no such events.
    pub other: Option<f64>,
    /// Number of distinct events that were ranked.
    pub event_count: usize,
}

impl Report {
    /// Ranks `stats_by_event` by descending zero-padded mean and truncates according to `policy`.
    ///
    /// The sort is stable, so events with equal means keep the name order of `stats_by_event`.
    pub fn build(stats_by_event: &EventMap<EventStatistics>, policy: &ReportPolicy) -> Self {
        let mut ranked: Vec<(&String, &EventStatistics)> = stats_by_event.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.padded_mean.total_cmp(&a.padded_mean));

        let rows = ranked
            .iter()
            .take(policy.top_n)
            .map(|(name, stats)| ReportRow {
                name: (*name).clone(),
                stats: **stats,
            })
            .collect();

        let other = (ranked.len() > policy.rollup_from).then(|| {
            ranked[policy.rollup_from..]
                .iter()
                .map(|(_, stats)| stats.padded_mean)
                .sum::<f64>()
        });

        Self {
            rows,
            other,
            event_count: ranked.len(),
        }
    }

    /// Sum of the zero-padded means of the listed rows and the rollup.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.stats.padded_mean).sum::<f64>() + self.other.unwrap_or(0.0)
    }

    /// Each listed row's zero-padded mean as a fraction of [`Self::total`], followed by the
    /// rollup's fraction under [`OTHER_ROW_NAME`] if there is one. Fractions are 0 when the total
    /// is 0.
    pub fn shares(&self) -> Vec<(&str, f64)> {
        let total = self.total();
        let share = |value: f64| if total > 0.0 { value / total } else { 0.0 };
        self.rows
            .iter()
            .map(|row| (row.name.as_str(), share(row.stats.padded_mean)))
            .chain(self.other.map(|other| (OTHER_ROW_NAME, share(other))))
            .collect()
    }
}
