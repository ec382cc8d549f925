use async_trait::async_trait;
use zonecache_domain::{DomainError, ListOptions, RecordPage, ZoneRecord, ZoneRecordAttributes};

/// Remote zone records API.
///
/// Implementations own transport, authentication and retries. Errors are
/// surfaced to cache callers exactly as returned.
#[async_trait]
pub trait ZoneRecordsClient: Send + Sync {
    async fn list_records(
        &self,
        account_id: &str,
        zone_name: &str,
        options: &ListOptions,
    ) -> Result<RecordPage, DomainError>;

    async fn create_record(
        &self,
        account_id: &str,
        zone_name: &str,
        attributes: &ZoneRecordAttributes,
    ) -> Result<ZoneRecord, DomainError>;

    async fn update_record(
        &self,
        account_id: &str,
        zone_name: &str,
        record_id: i64,
        attributes: &ZoneRecordAttributes,
    ) -> Result<ZoneRecord, DomainError>;

    async fn delete_record(
        &self,
        account_id: &str,
        zone_name: &str,
        record_id: i64,
    ) -> Result<(), DomainError>;
}
