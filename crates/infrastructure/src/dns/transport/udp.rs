//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing) over a transient connected socket,
//! one socket per attempt.

use super::resolver::resolve_upstream;
use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;
use zonerelay_domain::{DomainError, UpstreamAddr};

/// Largest reply read from an upstream.
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    upstream: UpstreamAddr,
}

impl UdpTransport {
    pub fn new(upstream: UpstreamAddr) -> Self {
        Self { upstream }
    }

    pub fn upstream(&self) -> &UpstreamAddr {
        &self.upstream
    }

    fn unavailable(&self, reason: String) -> DomainError {
        DomainError::UpstreamUnavailable {
            server: self.upstream.to_string(),
            reason,
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server_addr = resolve_upstream(&self.upstream, timeout).await?;

        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.unavailable(format!("failed to bind UDP socket: {}", e)))?;

        socket
            .connect(server_addr)
            .await
            .map_err(|e| self.unavailable(format!("failed to connect: {}", e)))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send(message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| self.unavailable(format!("failed to send query: {}", e)))?;

        debug!(server = %server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = tokio::time::timeout(timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| self.unavailable(format!("failed to receive reply: {}", e)))?;

        recv_buf.truncate(bytes_received);
        validate_response_id(message_bytes, &recv_buf, server_addr)?;

        debug!(server = %server_addr, bytes_received, "UDP reply received");

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

/// Rejects a reply whose transaction ID differs from the query's.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::UpstreamUnavailable {
            server: server.to_string(),
            reason: "message too short to carry an ID".to_string(),
        });
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);
    if query_id != response_id {
        return Err(DomainError::UpstreamUnavailable {
            server: server.to_string(),
            reason: format!(
                "transaction ID mismatch: sent {:#06x}, got {:#06x}",
                query_id, response_id
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
