#![allow(dead_code)]
use zonecache_domain::{ZoneRecord, ZoneRecordAttributes};

pub fn make_record(id: i64, zone: &str) -> ZoneRecord {
    ZoneRecord {
        id,
        zone_id: zone.to_string(),
        parent_id: None,
        name: format!("host-{}", id),
        content: format!("192.0.2.{}", id % 255),
        ttl: 3600,
        priority: None,
        record_type: "A".to_string(),
        regions: vec!["global".to_string()],
        system_record: false,
    }
}

/// `count` records with ids `first_id..first_id + count`.
pub fn make_records(first_id: i64, count: usize, zone: &str) -> Vec<ZoneRecord> {
    (0..count as i64)
        .map(|offset| make_record(first_id + offset, zone))
        .collect()
}

pub fn make_attributes(name: &str, content: &str) -> ZoneRecordAttributes {
    ZoneRecordAttributes {
        name: name.to_string(),
        record_type: "A".to_string(),
        content: content.to_string(),
        ttl: Some(600),
        priority: None,
        regions: vec![],
    }
}
