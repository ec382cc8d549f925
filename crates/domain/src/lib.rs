//! zonecache domain layer
pub mod config;
pub mod errors;
pub mod pagination;
pub mod zone_key;
pub mod zone_record;

pub use config::{Config, ConfigError, RecordsCacheConfig};
pub use errors::DomainError;
pub use pagination::{ListOptions, Pagination, RecordPage, PAGE_SIZE};
pub use zone_key::ZoneKey;
pub use zone_record::{ZoneRecord, ZoneRecordAttributes};
