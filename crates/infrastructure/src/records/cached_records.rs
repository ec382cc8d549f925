use super::cache::{RecordSnapshot, RecordsCacheMetrics, RequestCoalescer, SnapshotCache};
use super::pagination::PaginationAssembler;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use tracing::{debug, info};
use zonecache_application::ports::{RecordsCacheStats, ZoneRecordsCachePort, ZoneRecordsClient};
use zonecache_domain::{
    DomainError, RecordsCacheConfig, ZoneKey, ZoneRecord, ZoneRecordAttributes, PAGE_SIZE,
};

/// Read-through cache in front of a [`ZoneRecordsClient`].
///
/// Reads are served from a per-zone snapshot holding every record of the
/// zone. A missing snapshot is assembled once no matter how many readers ask
/// for it concurrently. Writes drop the zone's snapshot and in-flight fetch
/// before they reach the client, and are never cached themselves.
///
/// A read that races a write can still store pre-write data: the snapshot is
/// cleared before the client call, not after it becomes visible upstream.
pub struct CachedZoneRecords {
    client: Arc<dyn ZoneRecordsClient>,
    assembler: PaginationAssembler,
    cache: SnapshotCache,
    coalescer: RequestCoalescer<ZoneKey, RecordSnapshot>,
    metrics: Arc<RecordsCacheMetrics>,
}

impl CachedZoneRecords {
    pub fn new(client: Arc<dyn ZoneRecordsClient>, config: &RecordsCacheConfig) -> Self {
        info!(
            page_size = PAGE_SIZE,
            shard_amount = config.shard_amount,
            "Initializing zone records cache"
        );

        let metrics = Arc::new(RecordsCacheMetrics::default());
        Self {
            assembler: PaginationAssembler::new(Arc::clone(&client), Arc::clone(&metrics)),
            client,
            cache: SnapshotCache::new(config.shard_amount),
            coalescer: RequestCoalescer::new(),
            metrics,
        }
    }

    pub async fn get_record(
        &self,
        account_id: &str,
        zone_name: &str,
        record_id: i64,
    ) -> Result<ZoneRecord, DomainError> {
        let key = ZoneKey::new(account_id, zone_name);
        let records = self.snapshot(&key).await?;

        records
            .iter()
            .find(|record| record.id == record_id)
            .cloned()
            .ok_or_else(|| DomainError::RecordNotFound {
                zone: key.to_string(),
                record_id,
            })
    }

    /// All records of a zone, served from the snapshot cache.
    pub async fn list_records(
        &self,
        account_id: &str,
        zone_name: &str,
    ) -> Result<RecordSnapshot, DomainError> {
        let key = ZoneKey::new(account_id, zone_name);
        self.snapshot(&key).await
    }

    pub async fn create_record(
        &self,
        account_id: &str,
        zone_name: &str,
        attributes: &ZoneRecordAttributes,
    ) -> Result<ZoneRecord, DomainError> {
        let key = ZoneKey::new(account_id, zone_name);
        self.clear_zone(&key);
        self.client
            .create_record(account_id, zone_name, attributes)
            .await
    }

    pub async fn update_record(
        &self,
        account_id: &str,
        zone_name: &str,
        record_id: i64,
        attributes: &ZoneRecordAttributes,
    ) -> Result<ZoneRecord, DomainError> {
        let key = ZoneKey::new(account_id, zone_name);
        self.clear_zone(&key);
        self.client
            .update_record(account_id, zone_name, record_id, attributes)
            .await
    }

    pub async fn delete_record(
        &self,
        account_id: &str,
        zone_name: &str,
        record_id: i64,
    ) -> Result<(), DomainError> {
        let key = ZoneKey::new(account_id, zone_name);
        self.clear_zone(&key);
        self.client
            .delete_record(account_id, zone_name, record_id)
            .await
    }

    /// Forces the next read of a zone to go upstream.
    pub fn invalidate_zone(&self, account_id: &str, zone_name: &str) -> bool {
        self.clear_zone(&ZoneKey::new(account_id, zone_name))
    }

    async fn snapshot(&self, key: &ZoneKey) -> Result<RecordSnapshot, DomainError> {
        if let Some(records) = self.cache.get(key) {
            self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
            debug!(zone = %key, records = records.len(), "Records cache HIT");
            return Ok(records);
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        debug!(zone = %key, "Records cache MISS");

        self.coalescer.run_once(key, || self.load(key)).await
    }

    async fn load(&self, key: &ZoneKey) -> Result<RecordSnapshot, DomainError> {
        // A leader that finished just before we registered may have filled it.
        if let Some(records) = self.cache.get(key) {
            return Ok(records);
        }

        let records: RecordSnapshot = self.assembler.fetch_all(key).await?.into();
        self.cache.put(key.clone(), Arc::clone(&records));

        debug!(zone = %key, records = records.len(), "Stored zone records snapshot");
        Ok(records)
    }

    fn clear_zone(&self, key: &ZoneKey) -> bool {
        self.coalescer.forget(key);
        let removed = self.cache.remove(key);
        self.metrics
            .invalidations
            .fetch_add(1, AtomicOrdering::Relaxed);

        debug!(zone = %key, removed, "Invalidated zone records");
        removed
    }
}

impl ZoneRecordsCachePort for CachedZoneRecords {
    fn cached_zones(&self) -> Vec<ZoneKey> {
        self.cache.keys()
    }

    fn stats(&self) -> RecordsCacheStats {
        RecordsCacheStats {
            cached_zones: self.cache.len(),
            in_flight_fetches: self.coalescer.in_flight(),
            hits: self.metrics.hits.load(AtomicOrdering::Relaxed),
            misses: self.metrics.misses.load(AtomicOrdering::Relaxed),
            upstream_fetches: self.metrics.upstream_fetches.load(AtomicOrdering::Relaxed),
            pages_fetched: self.metrics.pages_fetched.load(AtomicOrdering::Relaxed),
            failed_fetches: self.metrics.failed_fetches.load(AtomicOrdering::Relaxed),
            invalidations: self.metrics.invalidations.load(AtomicOrdering::Relaxed),
            hit_rate: self.metrics.hit_rate(),
        }
    }

    fn invalidate(&self, key: &ZoneKey) -> bool {
        self.clear_zone(key)
    }
}
