use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS packet: {0}")]
    MalformedPacket(String),

    #[error("Socket error: {0}")]
    SocketError(String),

    #[error("Upstream {server} unavailable: {reason}")]
    UpstreamUnavailable { server: String, reason: String },

    #[error("Query timeout")]
    QueryTimeout,

    #[error("All upstream servers are unreachable")]
    AllUpstreamsFailed,

    #[error("Failed to load zone file {path}: {reason}")]
    ZoneLoadError { path: String, reason: String },

    #[error("Invalid zone record: {0}")]
    InvalidRecord(String),

    #[error("Invalid upstream address: {0}")]
    InvalidUpstreamAddress(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// True for failures that only concern a single datagram and must never
    /// stop the listener.
    pub fn is_per_datagram(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedPacket(_)
                | DomainError::SocketError(_)
                | DomainError::UpstreamUnavailable { .. }
                | DomainError::QueryTimeout
                | DomainError::AllUpstreamsFailed
        )
    }
}
