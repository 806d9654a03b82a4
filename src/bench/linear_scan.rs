use crate::bench::value::ValueRecord;

/// Linear-scan lookup over an externally owned record slice.
///
/// The reference baseline the harness compares the hash table against. It
/// holds no state beyond the borrowed slice and performs O(n) key searches.
pub struct LinearScanIndex<'a> {
    records: &'a [ValueRecord],
}

impl<'a> LinearScanIndex<'a> {
    pub fn new(records: &'a [ValueRecord]) -> Self {
        Self { records }
    }

    /// Scans the slice front to back for an exact key match.
    pub fn find(&self, key: &str) -> Option<&'a ValueRecord> {
        self.records.iter().find(|record| record.key == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
