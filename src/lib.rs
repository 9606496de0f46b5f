//! Ranks the sub-stages of request handling by how much they contribute to end-to-end latency.
//!
//! Input is a line-delimited JSON file of trace records. Each record carries a list of latency
//! samples, and each sample breaks its latency down into named events under two taxonomies
//! (bottom-up and top-down), each split into a queueing and a handling namespace.
//!
//! For every taxonomy the events are grouped three ways (queueing only, handling only, and the
//! per-sample sum of both) and summarized with an occurrence mean, a zero-padded mean over all
//! samples, the median and the 25th/75th/90th/99th percentiles. Each grouping becomes a CSV report
//! ranked by zero-padded mean, so a batch yields six reports.
//!
//! ```no_run
//! use latency_breakdown::LatencyBreakdown;
//! use std::path::Path;
//!
//! let written = LatencyBreakdown::new()
//!     .analyze_file(Path::new("traces.json"))
//!     .expect("analysis failed");
//! for path in written {
//!     println!("{}", path.display());
//! }
//! ```
#![deny(clippy::unwrap_used)]

mod error;
pub use error::*;

mod event_map;
pub use event_map::*;

mod trace_record;
pub use trace_record::*;

mod trace_source;
pub use trace_source::*;

mod event_extract;
pub use event_extract::*;

mod event_aggregate;
pub use event_aggregate::*;

mod summary_stats;
pub use summary_stats::*;

mod report;
pub use report::*;

mod report_csv;
pub use report_csv::*;

mod pipeline;
pub use pipeline::*;
