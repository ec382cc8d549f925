use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

#[derive(Default)]
pub struct RecordsCacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,

    // Upstream side: one fetch is one full pagination run.
    pub upstream_fetches: AtomicU64,
    pub pages_fetched: AtomicU64,
    pub failed_fetches: AtomicU64,

    pub invalidations: AtomicU64,
}

impl RecordsCacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(AtomicOrdering::Relaxed) as f64;
        let total = hits + self.misses.load(AtomicOrdering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }
}
