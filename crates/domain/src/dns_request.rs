use std::net::SocketAddr;
use std::sync::Arc;

/// A decoded question together with who asked it.
///
/// `qtype` is the raw wire value so types the zone does not know about can
/// still be relayed upstream untouched.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub id: u16,
    pub domain: Arc<str>,
    pub qtype: u16,
    pub client: SocketAddr,
}

impl DnsRequest {
    pub fn new(id: u16, domain: impl Into<Arc<str>>, qtype: u16, client: SocketAddr) -> Self {
        Self {
            id,
            domain: domain.into(),
            qtype,
            client,
        }
    }
}
