//! Errors returned by the statistics engine and the analysis pipeline.

use crate::{Grouping, Taxonomy};
use std::{io, path::PathBuf};
use thiserror::Error;

/// Error returned by [`summarize`](crate::summarize) when an event series violates its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Statistics over zero occurrences are undefined.
    #[error("event series has no occurrences")]
    EmptySeries,

    /// The population every mean is padded to must cover all occurrences.
    #[error("population of {population} samples is smaller than the {occurrences} occurrences")]
    PopulationTooSmall {
        population: usize,
        occurrences: usize,
    },
}

/// Fatal errors of an analysis run. Per-line decode failures are not errors; they are logged and
/// skipped by [`decode_records`](crate::decode_records).
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to open trace input `{}`", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read trace input")]
    Read(#[source] io::Error),

    #[error("no eligible latency samples in the trace batch")]
    EmptyBatch,

    #[error("{grouping} statistics for {taxonomy} event `{event}` could not be computed")]
    Stats {
        taxonomy: Taxonomy,
        grouping: Grouping,
        event: String,
        #[source]
        source: StatsError,
    },

    #[error("failed to write report `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
