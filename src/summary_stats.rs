//! Occurrence-aware summary statistics of an event series.

use crate::StatsError;

/// Summary statistics of the durations observed for one event.
///
/// The two means differ in their denominator: [`mean`](Self::mean) averages over the samples in
/// which the event occurred, while [`padded_mean`](Self::padded_mean) averages over the whole
/// population, as if every sample without the event had contributed a zero. Percentiles are
/// always taken over the occurrences only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventStatistics {
    pub occurrences: usize,
    pub mean: f64,
    pub padded_mean: f64,
    pub median: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
    pub p99: f64,
}

impl EventStatistics {
    /// Computes the statistics of `series` against a population of `population` samples.
    ///
    /// # Errors
    /// - [`StatsError::EmptySeries`] if `series` is empty.
    /// - [`StatsError::PopulationTooSmall`] if `population` is smaller than `series.len()`.
    pub fn new(series: &[f64], population: usize) -> Result<Self, StatsError> {
        let occurrences = series.len();
        if occurrences == 0 {
            return Err(StatsError::EmptySeries);
        }
        if population < occurrences {
            return Err(StatsError::PopulationTooSmall {
                population,
                occurrences,
            });
        }

        let sum: f64 = series.iter().sum();
        let mut sorted = series.to_vec();
        sorted.sort_by(f64::total_cmp);

        Ok(Self {
            occurrences,
            mean: sum / occurrences as f64,
            padded_mean: sum / population as f64,
            median: percentile(&sorted, 50.0),
            p25: percentile(&sorted, 25.0),
            p75: percentile(&sorted, 75.0),
            p90: percentile(&sorted, 90.0),
            p99: percentile(&sorted, 99.0),
        })
    }
}

/// Computes an [`EventStatistics`] from an event series and the population size.
pub fn summarize(series: &[f64], population: usize) -> Result<EventStatistics, StatsError> {
    EventStatistics::new(series, population)
}

/// Value at percentile `pct` (0 to 100) of the ascending, non-empty slice `sorted`, interpolating
/// linearly between the two closest ranks. Returns `NaN` for an empty slice.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return f64::NAN,
    };
    if pct <= 0.0 {
        return first;
    }
    if pct >= 100.0 {
        return last;
    }

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
