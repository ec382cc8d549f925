mod records_cache_port;
mod zone_records_client;

pub use records_cache_port::{RecordsCacheStats, ZoneRecordsCachePort};
pub use zone_records_client::ZoneRecordsClient;

// Re-export for convenience
pub use zonecache_domain::ZoneKey;
