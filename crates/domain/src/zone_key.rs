use compact_str::CompactString;
use std::fmt;

/// Identifies one zone's record collection within one account.
///
/// Both components take part in equality and hashing, so the key can be
/// used directly as a map key or as a deduplication token without any
/// string concatenation. Components are opaque; the remote API decides
/// whether they are valid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZoneKey {
    account_id: CompactString,
    zone_name: CompactString,
}

impl ZoneKey {
    #[inline]
    pub fn new(account_id: &str, zone_name: &str) -> Self {
        Self {
            account_id: CompactString::from(account_id),
            zone_name: CompactString::from(zone_name),
        }
    }

    #[inline]
    pub fn account_id(&self) -> &str {
        self.account_id.as_str()
    }

    #[inline]
    pub fn zone_name(&self) -> &str {
        self.zone_name.as_str()
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.account_id, self.zone_name)
    }
}
