//! zonecache application layer: ports consumed and exposed by the cache
pub mod ports;
