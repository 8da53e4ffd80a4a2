use crate::ports::{UpstreamForwarder, UpstreamReply};
use crate::services::ZoneStore;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use zonerelay_domain::{DnsRequest, DomainError, ZoneRecord};

/// How a query got answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsAnswer {
    /// The zone holds a record for the name; the caller encodes the reply.
    Local(ZoneRecord),
    /// Relayed upstream; the bytes go back to the client unmodified.
    Upstream(UpstreamReply),
}

pub struct HandleDnsQueryUseCase {
    zone: Arc<ZoneStore>,
    forwarder: Arc<dyn UpstreamForwarder>,
}

impl HandleDnsQueryUseCase {
    pub fn new(zone: Arc<ZoneStore>, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        Self { zone, forwarder }
    }

    pub async fn execute(
        &self,
        request: &DnsRequest,
        raw_query: &[u8],
    ) -> Result<DnsAnswer, DomainError> {
        if let Some(record) = self.zone.lookup(&request.domain) {
            info!(
                domain = %request.domain,
                value = %record.value,
                client = %request.client,
                "Answered from local zone"
            );
            return Ok(DnsAnswer::Local(record));
        }

        debug!(domain = %request.domain, qtype = request.qtype, "Not in zone, forwarding");
        let start = Instant::now();

        match self.forwarder.forward(raw_query).await {
            Ok(reply) => {
                info!(
                    domain = %request.domain,
                    upstream = %reply.upstream,
                    bytes = reply.bytes.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    client = %request.client,
                    "Relayed upstream reply"
                );
                Ok(DnsAnswer::Upstream(reply))
            }
            Err(e) => {
                warn!(
                    domain = %request.domain,
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Forwarding failed, dropping query"
                );
                Err(e)
            }
        }
    }
}
