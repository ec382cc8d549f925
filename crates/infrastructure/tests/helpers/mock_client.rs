#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use zonecache_application::ports::ZoneRecordsClient;
use zonecache_domain::{
    DomainError, ListOptions, Pagination, RecordPage, ZoneRecord, ZoneRecordAttributes,
};

type ZoneId = (String, String);

/// In-memory zone records API that paginates like the real endpoint and
/// counts every call it receives.
#[derive(Clone)]
pub struct MockZoneRecordsClient {
    zones: Arc<Mutex<HashMap<ZoneId, Vec<ZoneRecord>>>>,
    page_delay: Duration,
    failing_pages: Arc<Mutex<HashMap<ZoneId, u32>>>,
    write_error: Arc<Mutex<Option<DomainError>>>,
    list_calls: Arc<AtomicUsize>,
    page_calls: Arc<Mutex<HashMap<(ZoneId, u32), usize>>>,
    write_calls: Arc<AtomicUsize>,
    next_id: Arc<AtomicI64>,
}

impl MockZoneRecordsClient {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(Mutex::new(HashMap::new())),
            page_delay: Duration::ZERO,
            failing_pages: Arc::new(Mutex::new(HashMap::new())),
            write_error: Arc::new(Mutex::new(None)),
            list_calls: Arc::new(AtomicUsize::new(0)),
            page_calls: Arc::new(Mutex::new(HashMap::new())),
            write_calls: Arc::new(AtomicUsize::new(0)),
            next_id: Arc::new(AtomicI64::new(1_000_000)),
        }
    }

    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    pub fn with_zone(self, account_id: &str, zone_name: &str, records: Vec<ZoneRecord>) -> Self {
        self.set_zone(account_id, zone_name, records);
        self
    }

    pub fn set_zone(&self, account_id: &str, zone_name: &str, records: Vec<ZoneRecord>) {
        self.zones
            .lock()
            .unwrap()
            .insert(zone_id(account_id, zone_name), records);
    }

    pub fn fail_on_page(&self, account_id: &str, zone_name: &str, page: u32) {
        self.failing_pages
            .lock()
            .unwrap()
            .insert(zone_id(account_id, zone_name), page);
    }

    pub fn clear_failures(&self) {
        self.failing_pages.lock().unwrap().clear();
    }

    pub fn fail_writes_with(&self, error: DomainError) {
        *self.write_error.lock().unwrap() = Some(error);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn page_calls(&self, account_id: &str, zone_name: &str, page: u32) -> usize {
        self.page_calls
            .lock()
            .unwrap()
            .get(&(zone_id(account_id, zone_name), page))
            .copied()
            .unwrap_or(0)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn check_write(&self) -> Result<(), DomainError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        match self.write_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn page_of(
        &self,
        id: &ZoneId,
        zone_name: &str,
        options: &ListOptions,
    ) -> Result<RecordPage, DomainError> {
        if self.failing_pages.lock().unwrap().get(id) == Some(&options.page) {
            return Err(DomainError::UpstreamStatus {
                status: 502,
                message: format!("page {} unavailable", options.page),
            });
        }

        let zones = self.zones.lock().unwrap();
        let records = zones.get(id).ok_or_else(|| DomainError::UpstreamStatus {
            status: 404,
            message: format!("zone {} not found", zone_name),
        })?;

        let per_page = options.per_page.max(1) as usize;
        let total_entries = records.len();
        let total_pages = total_entries.div_ceil(per_page) as u32;
        let start = (options.page.saturating_sub(1) as usize) * per_page;
        let data = records
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();

        Ok(RecordPage {
            data,
            pagination: Pagination {
                current_page: options.page,
                per_page: options.per_page,
                total_entries: total_entries as u64,
                total_pages,
            },
        })
    }

    fn record_from(&self, id: i64, zone_name: &str, attrs: &ZoneRecordAttributes) -> ZoneRecord {
        ZoneRecord {
            id,
            zone_id: zone_name.to_string(),
            parent_id: None,
            name: attrs.name.clone(),
            content: attrs.content.clone(),
            ttl: attrs.ttl.unwrap_or(3600),
            priority: attrs.priority,
            record_type: attrs.record_type.clone(),
            regions: attrs.regions.clone(),
            system_record: false,
        }
    }
}

impl Default for MockZoneRecordsClient {
    fn default() -> Self {
        Self::new()
    }
}

fn zone_id(account_id: &str, zone_name: &str) -> ZoneId {
    (account_id.to_string(), zone_name.to_string())
}

#[async_trait]
impl ZoneRecordsClient for MockZoneRecordsClient {
    async fn list_records(
        &self,
        account_id: &str,
        zone_name: &str,
        options: &ListOptions,
    ) -> Result<RecordPage, DomainError> {
        let id = zone_id(account_id, zone_name);
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .page_calls
            .lock()
            .unwrap()
            .entry((id.clone(), options.page))
            .or_insert(0) += 1;

        // The page reflects the zone as it was when the request arrived.
        let page = self.page_of(&id, zone_name, options);

        if !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }

        page
    }

    async fn create_record(
        &self,
        account_id: &str,
        zone_name: &str,
        attributes: &ZoneRecordAttributes,
    ) -> Result<ZoneRecord, DomainError> {
        self.check_write()?;
        let record = self.record_from(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            zone_name,
            attributes,
        );
        self.zones
            .lock()
            .unwrap()
            .entry(zone_id(account_id, zone_name))
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn update_record(
        &self,
        account_id: &str,
        zone_name: &str,
        record_id: i64,
        attributes: &ZoneRecordAttributes,
    ) -> Result<ZoneRecord, DomainError> {
        self.check_write()?;
        let updated = self.record_from(record_id, zone_name, attributes);
        let mut zones = self.zones.lock().unwrap();
        let slot = zones
            .get_mut(&zone_id(account_id, zone_name))
            .and_then(|records| records.iter_mut().find(|r| r.id == record_id))
            .ok_or_else(|| DomainError::UpstreamStatus {
                status: 404,
                message: format!("record {} not found", record_id),
            })?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_record(
        &self,
        account_id: &str,
        zone_name: &str,
        record_id: i64,
    ) -> Result<(), DomainError> {
        self.check_write()?;
        if let Some(records) = self
            .zones
            .lock()
            .unwrap()
            .get_mut(&zone_id(account_id, zone_name))
        {
            records.retain(|r| r.id != record_id);
        }
        Ok(())
    }
}
