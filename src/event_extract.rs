//! Extraction of per-sample event observations for one taxonomy.

use crate::{LatencySample, Namespace, Taxonomy};

/// A single named duration drawn from one namespace of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventObservation<'a> {
    pub namespace: Namespace,
    /// Position of the sample within its batch.
    pub sample_idx: usize,
    pub name: &'a str,
    pub duration: f64,
}

/// Yields the observations of every sample under `taxonomy`, sample by sample, queueing events
/// before handling events. Entries with a `null` duration yield nothing.
pub fn extract(
    samples: &[LatencySample],
    taxonomy: Taxonomy,
) -> impl Iterator<Item = EventObservation<'_>> {
    samples
        .iter()
        .enumerate()
        .flat_map(move |(sample_idx, sample)| {
            let breakdown = sample.breakdown(taxonomy);
            Namespace::ALL.into_iter().flat_map(move |namespace| {
                breakdown
                    .events(namespace)
                    .iter()
                    .filter_map(move |(name, duration)| {
                        duration.map(|duration| EventObservation {
                            namespace,
                            sample_idx,
                            name: name.as_str(),
                            duration,
                        })
                    })
            })
        })
}
