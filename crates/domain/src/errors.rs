use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Record {record_id} not found in zone {zone}")]
    RecordNotFound { zone: String, record_id: i64 },

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Upstream responded with status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Upstream request timeout")]
    UpstreamTimeout,
}

impl DomainError {
    /// True for failures reported by the remote API rather than by this crate.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream(_) | Self::UpstreamStatus { .. } | Self::UpstreamTimeout
        )
    }
}
