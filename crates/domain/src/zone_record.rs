use serde::{Deserialize, Serialize};

/// A single record of a hosted zone as returned by the remote API.
///
/// Only `id` is interpreted by the cache; every other field is passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZoneRecord {
    pub id: i64,

    #[serde(default)]
    pub zone_id: String,

    #[serde(default)]
    pub parent_id: Option<i64>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub ttl: u32,

    #[serde(default)]
    pub priority: Option<u32>,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(default)]
    pub regions: Vec<String>,

    #[serde(default)]
    pub system_record: bool,
}

/// Payload for creating or updating a zone record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZoneRecordAttributes {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
}
