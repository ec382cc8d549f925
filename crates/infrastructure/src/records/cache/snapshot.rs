use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use zonecache_domain::{ZoneKey, ZoneRecord};

/// Complete, ordered record listing of one zone. Shared read-only.
pub type RecordSnapshot = Arc<[ZoneRecord]>;

/// Concurrent map from zone to its last fully assembled record listing.
///
/// Entries never expire; they are only replaced by `put` or dropped by
/// `remove`.
pub struct SnapshotCache {
    snapshots: DashMap<ZoneKey, RecordSnapshot, FxBuildHasher>,
}

impl SnapshotCache {
    pub fn new(shard_amount: usize) -> Self {
        // DashMap panics unless the shard amount is a power of two above 1.
        let shard_amount = shard_amount.max(2).next_power_of_two();
        Self {
            snapshots: DashMap::with_hasher_and_shard_amount(FxBuildHasher, shard_amount),
        }
    }

    #[inline]
    pub fn get(&self, key: &ZoneKey) -> Option<RecordSnapshot> {
        self.snapshots.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn put(&self, key: ZoneKey, snapshot: RecordSnapshot) {
        self.snapshots.insert(key, snapshot);
    }

    pub fn remove(&self, key: &ZoneKey) -> bool {
        self.snapshots.remove(key).is_some()
    }

    pub fn keys(&self) -> Vec<ZoneKey> {
        self.snapshots
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(16)
    }
}
