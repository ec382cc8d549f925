use zonecache_domain::ZoneKey;

/// Snapshot of zone records cache metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsCacheStats {
    pub cached_zones: usize,
    pub in_flight_fetches: usize,
    pub hits: u64,
    pub misses: u64,
    pub upstream_fetches: u64,
    pub pages_fetched: u64,
    pub failed_fetches: u64,
    pub invalidations: u64,
    pub hit_rate: f64,
}

/// Port for inspecting and invalidating the zone records cache.
pub trait ZoneRecordsCachePort: Send + Sync {
    fn cached_zones(&self) -> Vec<ZoneKey>;
    fn stats(&self) -> RecordsCacheStats;
    /// Drops the cached snapshot and any in-flight registration for `key`.
    /// Returns whether a snapshot was cached.
    fn invalidate(&self, key: &ZoneKey) -> bool;
}
