use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use zonerelay_application::ports::{UpstreamForwarder, UpstreamReply};
use zonerelay_domain::{DomainError, UpstreamAddr};

/// Relays raw queries to the configured upstreams, one at a time in
/// configuration order, returning the first reply.
pub struct UdpForwarder {
    upstreams: Vec<UdpTransport>,
    timeout: Duration,
}

impl UdpForwarder {
    pub fn new(upstreams: Vec<UpstreamAddr>, timeout: Duration) -> Self {
        Self {
            upstreams: upstreams.into_iter().map(UdpTransport::new).collect(),
            timeout,
        }
    }

    pub fn upstream_count(&self) -> usize {
        self.upstreams.len()
    }

    fn fold_timeout(&self, transport: &UdpTransport, error: DomainError) -> DomainError {
        match error {
            DomainError::QueryTimeout => DomainError::UpstreamUnavailable {
                server: transport.upstream().to_string(),
                reason: format!("no reply within {}ms", self.timeout.as_millis()),
            },
            other => other,
        }
    }
}

#[async_trait]
impl UpstreamForwarder for UdpForwarder {
    async fn forward(&self, query: &[u8]) -> Result<UpstreamReply, DomainError> {
        debug!(
            strategy = "failover",
            servers = self.upstreams.len(),
            "Forwarding query upstream"
        );

        for (index, transport) in self.upstreams.iter().enumerate() {
            let start = Instant::now();
            match transport.send(query, self.timeout).await {
                Ok(response) => {
                    debug!(
                        server = %transport.upstream(),
                        protocol = response.protocol_used,
                        latency_ms = start.elapsed().as_millis() as u64,
                        position = index,
                        "Upstream responded"
                    );
                    return Ok(UpstreamReply {
                        bytes: response.bytes,
                        upstream: transport.upstream().to_string(),
                    });
                }
                Err(e) => {
                    let e = self.fold_timeout(transport, e);
                    warn!(server = %transport.upstream(), error = %e, position = index, "Upstream failed, trying next");
                }
            }
        }

        Err(DomainError::AllUpstreamsFailed)
    }
}
