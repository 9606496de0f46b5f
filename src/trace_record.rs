//! Typed form of the trace records found in the input, one per line.

use serde::Deserialize;
use std::{collections::BTreeMap, fmt};

/// Event name to duration. A `None` duration was recorded as `null` upstream and counts as absent.
pub type EventDurations = BTreeMap<String, Option<f64>>;

//=================
// Taxonomy and Namespace

/// One of the two alternative event-breakdown conventions applied to the same sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Taxonomy {
    BottomUp,
    TopDown,
}

impl Taxonomy {
    /// Both taxonomies, in the order the pipeline runs them.
    pub const ALL: [Taxonomy; 2] = [Taxonomy::BottomUp, Taxonomy::TopDown];

    /// Suffix appended to report file names for this taxonomy's pass.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Taxonomy::BottomUp => "",
            Taxonomy::TopDown => "_top_down",
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Taxonomy::BottomUp => f.write_str("bottom-up"),
            Taxonomy::TopDown => f.write_str("top-down"),
        }
    }
}

/// Queueing or handling events within a taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Queue,
    Handle,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::Queue, Namespace::Handle];
}

//=================
// Breakdown and LatencySample

/// The queueing and handling events of one sample under one taxonomy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    pub queue: EventDurations,
    pub handle: EventDurations,
}

impl Breakdown {
    pub fn events(&self, namespace: Namespace) -> &EventDurations {
        match namespace {
            Namespace::Queue => &self.queue,
            Namespace::Handle => &self.handle,
        }
    }
}

/// Shape of a latency sample on the wire.
#[derive(Deserialize)]
struct RawLatencySample {
    #[serde(rename = "Queue Events Bottom-Up")]
    queue_bottom_up: EventDurations,
    #[serde(rename = "Handling Events Bottom-Up")]
    handle_bottom_up: EventDurations,
    #[serde(rename = "Queue Events Top-Down")]
    queue_top_down: EventDurations,
    #[serde(rename = "Handling Events Top-Down")]
    handle_top_down: EventDurations,
}

/// One latency measurement broken down under both taxonomies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawLatencySample")]
pub struct LatencySample {
    pub bottom_up: Breakdown,
    pub top_down: Breakdown,
}

impl From<RawLatencySample> for LatencySample {
    fn from(raw: RawLatencySample) -> Self {
        Self {
            bottom_up: Breakdown {
                queue: raw.queue_bottom_up,
                handle: raw.handle_bottom_up,
            },
            top_down: Breakdown {
                queue: raw.queue_top_down,
                handle: raw.handle_top_down,
            },
        }
    }
}

impl LatencySample {
    pub fn breakdown(&self, taxonomy: Taxonomy) -> &Breakdown {
        match taxonomy {
            Taxonomy::BottomUp => &self.bottom_up,
            Taxonomy::TopDown => &self.top_down,
        }
    }
}

//=================
// TraceRecord

/// Key-value section of a trace record; only the latency samples are of interest here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TracePairs {
    #[serde(rename = "Latencies")]
    pub latencies: Vec<LatencySample>,
}

/// One processed request as decoded from a line of input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TraceRecord {
    /// Failure indicators; empty when the request succeeded. Their content is not interpreted.
    pub failures: Vec<serde_json::Value>,
    pub pairs: TracePairs,
}

impl TraceRecord {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn has_timing_data(&self) -> bool {
        !self.pairs.latencies.is_empty()
    }

    /// A record takes part in aggregation only if it succeeded and carries timing data.
    pub fn is_eligible(&self) -> bool {
        self.is_success() && self.has_timing_data()
    }

    pub fn samples(&self) -> &[LatencySample] {
        &self.pairs.latencies
    }
}
