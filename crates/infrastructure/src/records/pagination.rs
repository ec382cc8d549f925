use super::cache::RecordsCacheMetrics;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use tracing::{debug, warn};
use zonecache_application::ports::ZoneRecordsClient;
use zonecache_domain::{DomainError, ListOptions, ZoneKey, ZoneRecord, PAGE_SIZE};

/// Drives the remote listing endpoint page by page until a zone is complete.
pub struct PaginationAssembler {
    client: Arc<dyn ZoneRecordsClient>,
    metrics: Arc<RecordsCacheMetrics>,
}

impl PaginationAssembler {
    pub fn new(client: Arc<dyn ZoneRecordsClient>, metrics: Arc<RecordsCacheMetrics>) -> Self {
        Self { client, metrics }
    }

    /// Fetches every page of `key` in order.
    ///
    /// The first failing page aborts the run; records accumulated so far are
    /// discarded, never returned. A response that is not the last page and
    /// does not echo the requested page number is treated as an upstream
    /// failure, so a stuck cursor cannot loop forever.
    pub async fn fetch_all(&self, key: &ZoneKey) -> Result<Vec<ZoneRecord>, DomainError> {
        self.metrics
            .upstream_fetches
            .fetch_add(1, AtomicOrdering::Relaxed);

        let mut records: Option<Vec<ZoneRecord>> = None;
        let mut page = 1u32;

        loop {
            let options = ListOptions::new(page, PAGE_SIZE);
            let response = self
                .client
                .list_records(key.account_id(), key.zone_name(), &options)
                .await
                .inspect_err(|e| {
                    self.metrics
                        .failed_fetches
                        .fetch_add(1, AtomicOrdering::Relaxed);
                    warn!(zone = %key, page, error = %e, "Zone records page fetch failed");
                })?;

            self.metrics
                .pages_fetched
                .fetch_add(1, AtomicOrdering::Relaxed);

            let pagination = response.pagination;
            debug!(
                zone = %key,
                page,
                received = response.data.len(),
                total_pages = pagination.total_pages,
                "Fetched zone records page"
            );

            let acc = records.get_or_insert_with(|| {
                Vec::with_capacity(preallocation(pagination.total_entries, response.data.len()))
            });
            acc.extend(response.data);

            if pagination.is_last_page() {
                break;
            }
            if pagination.current_page != page {
                self.metrics
                    .failed_fetches
                    .fetch_add(1, AtomicOrdering::Relaxed);
                warn!(
                    zone = %key,
                    page,
                    current_page = pagination.current_page,
                    total_pages = pagination.total_pages,
                    "Zone records listing returned an unexpected page"
                );
                return Err(DomainError::Upstream(format!(
                    "requested page {} of zone {}, received page {} of {}",
                    page, key, pagination.current_page, pagination.total_pages
                )));
            }
            page += 1;
        }

        Ok(records.unwrap_or_default())
    }
}

// Upper bound on capacity reserved from an upstream-reported total.
const MAX_PREALLOCATED_RECORDS: usize = 100_000;

fn preallocation(total_entries: u64, first_page_len: usize) -> usize {
    usize::try_from(total_entries)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATED_RECORDS)
        .max(first_page_len)
}
