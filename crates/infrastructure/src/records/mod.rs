pub mod cache;
pub mod cached_records;
pub mod pagination;

pub use cache::{RecordSnapshot, RecordsCacheMetrics, RequestCoalescer, SnapshotCache};
pub use cached_records::CachedZoneRecords;
pub use pagination::PaginationAssembler;
