use crate::ZoneRecord;
use serde::{Deserialize, Serialize};

/// Records requested per page of a zone listing (the endpoint's maximum).
pub const PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListOptions {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl ListOptions {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total_entries: u64,
    pub total_pages: u32,
}

impl Pagination {
    #[inline]
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}

/// One page of a zone record listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordPage {
    pub data: Vec<ZoneRecord>,
    pub pagination: Pagination,
}
