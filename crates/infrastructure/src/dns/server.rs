use crate::dns::wire::{build_authoritative_response, decode_query};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};
use zonerelay_application::use_cases::{DnsAnswer, HandleDnsQueryUseCase};
use zonerelay_domain::{DnsRequest, DomainError};

/// Turns one inbound datagram into at most one outbound datagram.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the reply to send back to `client`, or `None` when the
    /// datagram must go unanswered.
    pub async fn handle_datagram(&self, buf: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match decode_query(buf) {
            Ok(query) => query,
            Err(e) => {
                warn!(client = %client, bytes = buf.len(), error = %e, "Dropping datagram");
                return None;
            }
        };

        if !query.question_complete {
            debug!(client = %client, domain = %query.domain, "Question section truncated");
        }

        let request = DnsRequest::new(query.header.id, query.domain.as_str(), query.qtype, client);
        debug!(id = request.id, domain = %request.domain, qtype = request.qtype, client = %client, "DNS query received");

        match self.use_case.execute(&request, buf).await {
            Ok(DnsAnswer::Local(record)) => {
                let response = build_authoritative_response(buf, &query, &record.value);
                debug!(domain = %request.domain, bytes = response.len(), "Sending authoritative response");
                Some(response)
            }
            Ok(DnsAnswer::Upstream(reply)) => Some(reply.bytes),
            Err(e) => {
                log_unanswered(&request, &e);
                None
            }
        }
    }
}

fn log_unanswered(request: &DnsRequest, error: &DomainError) {
    if error.is_per_datagram() {
        debug!(domain = %request.domain, client = %request.client, error = %error, "Query left unanswered");
    } else {
        warn!(domain = %request.domain, client = %request.client, error = %error, "Query left unanswered");
    }
}
