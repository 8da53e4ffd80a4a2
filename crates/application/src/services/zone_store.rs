use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::debug;
use zonerelay_domain::ZoneRecord;

/// In-memory zone table.
///
/// Readers work on an immutable snapshot; `append` publishes a new snapshot,
/// so the listener and the admin console never block each other.
pub struct ZoneStore {
    records: ArcSwap<Vec<ZoneRecord>>,
}

impl ZoneStore {
    pub fn new(records: Vec<ZoneRecord>) -> Self {
        Self {
            records: ArcSwap::from_pointee(records),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// First record whose name is exactly `domain`.
    pub fn lookup(&self, domain: &str) -> Option<ZoneRecord> {
        self.records
            .load()
            .iter()
            .find(|record| record.matches(domain))
            .cloned()
    }

    pub fn append(&self, record: ZoneRecord) {
        debug!(name = %record.name, record_type = %record.record_type, "Appending zone record");
        self.records.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(record.clone());
            next
        });
    }

    pub fn records(&self) -> Arc<Vec<ZoneRecord>> {
        self.records.load_full()
    }

    pub fn len(&self) -> usize {
        self.records.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.load().is_empty()
    }
}

impl Default for ZoneStore {
    fn default() -> Self {
        Self::empty()
    }
}
