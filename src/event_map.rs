//! Ordered map from event name to a per-event value.

use std::{
    collections::BTreeMap,
    ops::{Deref, DerefMut},
};

/// Wrapper of [`BTreeMap`]`<String, V>` keyed by event name. Iteration is in name order, which
/// makes every downstream result (including ranking ties) deterministic.
///
/// As this type [Deref]s to [BTreeMap] and implements [IntoIterator]s with the same results as
/// those of [BTreeMap], it supports `for` loops and all [BTreeMap] methods.
#[derive(Debug, PartialEq, Clone)]
pub struct EventMap<V>(pub BTreeMap<String, V>);

/// Durations observed for each event name, in sample order.
pub type EventSeriesMap = EventMap<Vec<f64>>;

impl<V> EventMap<V> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns a new [`EventMap`] with the same names as `self` and values produced by `f`.
    /// Stops at, and returns, the first error produced by `f` together with the name of the
    /// offending event.
    pub fn try_map_values<V1, E>(
        &self,
        mut f: impl FnMut(&V) -> Result<V1, E>,
    ) -> Result<EventMap<V1>, (String, E)> {
        let mut mapped = BTreeMap::new();
        for (k, v) in &self.0 {
            let v1 = f(v).map_err(|e| (k.clone(), e))?;
            mapped.insert(k.clone(), v1);
        }
        Ok(mapped.into())
    }
}

impl EventSeriesMap {
    /// Appends `duration` to the series of `name`, registering the name on its first occurrence.
    pub fn push(&mut self, name: &str, duration: f64) {
        match self.0.get_mut(name) {
            Some(series) => series.push(duration),
            None => {
                self.0.insert(name.to_owned(), vec![duration]);
            }
        }
    }
}

impl<V> Default for EventMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<BTreeMap<String, V>> for EventMap<V> {
    fn from(value: BTreeMap<String, V>) -> Self {
        Self(value)
    }
}

impl<V> Deref for EventMap<V> {
    type Target = BTreeMap<String, V>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<V> DerefMut for EventMap<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<V> IntoIterator for EventMap<V> {
    type Item = (String, V);
    type IntoIter = <BTreeMap<String, V> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a EventMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = <&'a BTreeMap<String, V> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
