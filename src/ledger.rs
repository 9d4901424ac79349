//! Scan Ledger

use rustc_hash::FxHashMap;

use crate::items::Sku;

/// How many units of each item have been scanned.
#[derive(Debug, Clone, Default)]
pub struct ScanLedger {
    counts: FxHashMap<Sku, u64>,
}

impl ScanLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more unit of `sku`, returning the new count.
    pub fn record(&mut self, sku: &str) -> u64 {
        if let Some(count) = self.counts.get_mut(sku) {
            *count = count.saturating_add(1);
            return *count;
        }

        self.counts.insert(Sku::from(sku), 1);

        1
    }

    /// Number of units of `sku` scanned so far
    pub fn count(&self, sku: &str) -> u64 {
        self.counts.get(sku).copied().unwrap_or(0)
    }

    /// Number of distinct items scanned
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing has been scanned
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of units scanned across all items
    pub fn total_units(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |acc, count| acc.saturating_add(*count))
    }

    /// Iterate over `(item, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Sku, u64)> {
        self.counts.iter().map(|(sku, count)| (sku, *count))
    }
}
