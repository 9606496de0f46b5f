//! Line-delimited trace input: decoding, eligibility filtering and flattening into a batch of
//! latency samples.

use crate::{AnalysisError, LatencySample, TraceRecord};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Decodes one [`TraceRecord`] per line of `reader`.
///
/// Lines that are not a well-formed record are skipped with a warning; blank lines are skipped
/// silently. Only a failure to read from `reader` itself is an error.
pub fn decode_records<R: BufRead>(reader: R) -> Result<Vec<TraceRecord>, AnalysisError> {
    log::trace!("entering `decode_records`");
    let mut records = Vec::new();
    let mut malformed = 0_usize;

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(AnalysisError::Read)?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match serde_json::from_slice::<TraceRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                malformed += 1;
                log::warn!("skipping malformed trace record on line {}: {e}", idx + 1);
            }
        }
    }

    log::info!(
        "decoded {} trace records, skipped {malformed} malformed lines",
        records.len()
    );
    Ok(records)
}

/// Keeps the records that succeeded and carry timing data, preserving their order.
pub fn filter_eligible(records: impl IntoIterator<Item = TraceRecord>) -> Vec<TraceRecord> {
    let mut rejected = 0_usize;
    let eligible: Vec<TraceRecord> = records
        .into_iter()
        .filter(|record| {
            let keep = record.is_eligible();
            if !keep {
                rejected += 1;
            }
            keep
        })
        .collect();
    log::info!(
        "{} eligible trace records, {rejected} rejected (failed or without timing data)",
        eligible.len()
    );
    eligible
}

//=================
// TraceBatch

/// The latency samples of all eligible records, in input order. Its length is the population
/// that zero-padded means are computed over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceBatch {
    samples: Vec<LatencySample>,
}

impl TraceBatch {
    /// Flattens the samples of `records`, which are expected to have gone through
    /// [`filter_eligible`].
    pub fn from_records(records: impl IntoIterator<Item = TraceRecord>) -> Self {
        let samples = records
            .into_iter()
            .flat_map(|record| record.pairs.latencies)
            .collect();
        Self { samples }
    }

    pub fn from_samples(samples: Vec<LatencySample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[LatencySample] {
        &self.samples
    }

    /// Number of samples every event's zero-padded mean is taken over.
    pub fn population(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Decodes, filters and flattens the records read from `reader`.
pub fn load_batch<R: BufRead>(reader: R) -> Result<TraceBatch, AnalysisError> {
    let records = decode_records(reader)?;
    Ok(TraceBatch::from_records(filter_eligible(records)))
}

/// Loads the trace batch stored at `path`.
pub fn read_trace_file(path: &Path) -> Result<TraceBatch, AnalysisError> {
    log::trace!("entering `read_trace_file` for {}", path.display());
    let file = File::open(path).map_err(|source| AnalysisError::Open {
        path: path.to_owned(),
        source,
    })?;
    load_batch(BufReader::new(file))
}
