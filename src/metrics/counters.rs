use std::collections::BTreeMap;

use dashmap::DashMap;

/// Label-keyed counters safe for any number of concurrent writers.
///
/// Every increment runs under the owning shard's lock, so racing writers on
/// the same label never lose updates. Reads are meant for after the run has
/// quiesced; a read racing with writers sees some prefix of them.
#[derive(Debug, Default)]
pub struct CounterStore {
    counts: DashMap<String, u64>,
}

impl CounterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` to `label`, creating it at zero first when absent.
    pub fn increment(&self, label: &str, delta: u64) {
        if let Some(mut count) = self.counts.get_mut(label) {
            *count = count.saturating_add(delta);
            return;
        }
        let mut count = self.counts.entry(label.to_owned()).or_insert(0);
        *count = count.saturating_add(delta);
    }

    /// Current count for `label`, or 0 if it was never incremented.
    #[must_use]
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).map_or(0, |count| *count)
    }

    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    #[must_use]
    pub fn sum(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(*entry.value()))
    }
}
