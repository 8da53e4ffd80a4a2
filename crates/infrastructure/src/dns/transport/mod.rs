pub mod resolver;
pub mod udp;

use async_trait::async_trait;
use std::time::Duration;
use zonerelay_domain::DomainError;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends `message_bytes` and waits for one reply, bounding each network
    /// step by `timeout`.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
