#![allow(unused)]

use latency_breakdown::{Breakdown, EventDurations, LatencySample, TracePairs, TraceRecord};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn f64_are_close(left: f64, right: f64, pct: f64) -> bool {
    let avg_abs = (left.abs() + right.abs()) / 2.0;
    (left - right).abs() <= avg_abs * pct
}

pub fn durations(events: &[(&str, Option<f64>)]) -> EventDurations {
    events
        .iter()
        .map(|(name, duration)| ((*name).to_owned(), *duration))
        .collect()
}

/// Sample with the given bottom-up events and empty top-down maps.
pub fn sample(queue: &[(&str, Option<f64>)], handle: &[(&str, Option<f64>)]) -> LatencySample {
    LatencySample {
        bottom_up: Breakdown {
            queue: durations(queue),
            handle: durations(handle),
        },
        top_down: Breakdown::default(),
    }
}

pub fn record(failures: Vec<serde_json::Value>, samples: Vec<LatencySample>) -> TraceRecord {
    TraceRecord {
        failures,
        pairs: TracePairs { latencies: samples },
    }
}

fn events_json(events: &EventDurations) -> serde_json::Value {
    serde_json::Value::Object(
        events
            .iter()
            .map(|(name, duration)| (name.clone(), serde_json::json!(duration)))
            .collect(),
    )
}

/// Encodes `record` in the line-delimited input format.
pub fn record_line(record: &TraceRecord) -> String {
    let latencies: Vec<serde_json::Value> = record
        .samples()
        .iter()
        .map(|s| {
            serde_json::json!({
                "Queue Events Bottom-Up": events_json(&s.bottom_up.queue),
                "Handling Events Bottom-Up": events_json(&s.bottom_up.handle),
                "Queue Events Top-Down": events_json(&s.top_down.queue),
                "Handling Events Top-Down": events_json(&s.top_down.handle),
            })
        })
        .collect();
    serde_json::json!({
        "failures": record.failures,
        "pairs": { "Latencies": latencies },
    })
    .to_string()
}

fn random_events(rng: &mut StdRng, n_names: usize) -> EventDurations {
    let mut events = EventDurations::new();
    for i in 0..n_names {
        if rng.gen_bool(0.5) {
            continue;
        }
        let duration = if rng.gen_bool(0.1) {
            None
        } else {
            Some(rng.gen_range(0_u32..10_000) as f64)
        };
        events.insert(format!("event_{i}"), duration);
    }
    events
}

/// Batch of `n_samples` random samples drawing event names from `n_names` candidates, with some
/// events missing and some `null` durations, under both taxonomies.
pub fn random_samples(seed: u64, n_samples: usize, n_names: usize) -> Vec<LatencySample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_samples)
        .map(|_| LatencySample {
            bottom_up: Breakdown {
                queue: random_events(&mut rng, n_names),
                handle: random_events(&mut rng, n_names),
            },
            top_down: Breakdown {
                queue: random_events(&mut rng, n_names),
                handle: random_events(&mut rng, n_names),
            },
        })
        .collect()
}
