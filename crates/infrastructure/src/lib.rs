//! zonecache infrastructure: the read-through zone records cache
pub mod records;
