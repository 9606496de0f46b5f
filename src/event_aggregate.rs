//! Grouping of event observations into per-name series.

use crate::{EventObservation, EventSeriesMap, Namespace};
use std::{collections::BTreeMap, fmt};

/// The three ways observations of one taxonomy are grouped into series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grouping {
    Queue,
    Handle,
    Combined,
}

impl Grouping {
    /// All groupings, in report output order.
    pub const ALL: [Grouping; 3] = [Grouping::Queue, Grouping::Handle, Grouping::Combined];

    /// Suffix appended to the input file stem to name this grouping's report.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Grouping::Queue => "_queue_averages",
            Grouping::Handle => "_handle_averages",
            Grouping::Combined => "_all_averages",
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grouping::Queue => f.write_str("queue"),
            Grouping::Handle => f.write_str("handle"),
            Grouping::Combined => f.write_str("combined"),
        }
    }
}

/// Event series of one taxonomy under each [`Grouping`].
///
/// A name only appears in a series map once it has at least one occurrence, so no series is ever
/// empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedSeries {
    pub queue: EventSeriesMap,
    pub handle: EventSeriesMap,
    /// Per sample, the sum of the queueing and handling durations of each name present in either
    /// namespace; a missing side counts as zero.
    pub combined: EventSeriesMap,
}

impl GroupedSeries {
    pub fn get(&self, grouping: Grouping) -> &EventSeriesMap {
        match grouping {
            Grouping::Queue => &self.queue,
            Grouping::Handle => &self.handle,
            Grouping::Combined => &self.combined,
        }
    }
}

/// Groups `observations` by event name.
///
/// Series values follow the order of the observations' `sample_idx`, so the result does not
/// depend on how the observations of different samples are interleaved.
pub fn aggregate<'a>(observations: impl IntoIterator<Item = EventObservation<'a>>) -> GroupedSeries {
    log::trace!("entering `aggregate`");
    let mut queue: BTreeMap<(&str, usize), f64> = BTreeMap::new();
    let mut handle: BTreeMap<(&str, usize), f64> = BTreeMap::new();
    let mut combined: BTreeMap<(&str, usize), f64> = BTreeMap::new();

    for obs in observations {
        let key = (obs.name, obs.sample_idx);
        let target = match obs.namespace {
            Namespace::Queue => &mut queue,
            Namespace::Handle => &mut handle,
        };
        target.insert(key, obs.duration);
        *combined.entry(key).or_insert(0.0) += obs.duration;
    }

    GroupedSeries {
        queue: into_series(queue),
        handle: into_series(handle),
        combined: into_series(combined),
    }
}

fn into_series(by_name_and_sample: BTreeMap<(&str, usize), f64>) -> EventSeriesMap {
    let mut series = EventSeriesMap::new();
    for ((name, _), duration) in by_name_and_sample {
        series.push(name, duration);
    }
    series
}
