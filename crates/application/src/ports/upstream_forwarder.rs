use async_trait::async_trait;
use zonerelay_domain::DomainError;

/// Raw reply relayed from an upstream resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub bytes: Vec<u8>,
    pub upstream: String,
}

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Relay `query` verbatim and return the first upstream reply.
    ///
    /// Returns `DomainError::AllUpstreamsFailed` when no upstream answered.
    async fn forward(&self, query: &[u8]) -> Result<UpstreamReply, DomainError>;
}
