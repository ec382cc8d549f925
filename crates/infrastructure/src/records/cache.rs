pub mod coalescer;
pub mod metrics;
pub mod snapshot;

pub use coalescer::RequestCoalescer;
pub use metrics::RecordsCacheMetrics;
pub use snapshot::{RecordSnapshot, SnapshotCache};
