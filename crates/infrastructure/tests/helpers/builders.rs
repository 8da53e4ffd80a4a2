#![allow(dead_code)]
use std::net::SocketAddr;
use zonerelay_domain::UpstreamAddr;

pub const QTYPE_A: u16 = 1;
pub const QTYPE_CNAME: u16 = 5;
pub const QTYPE_MX: u16 = 15;
pub const QTYPE_AAAA: u16 = 28;

/// Builds raw query datagrams the way a stub resolver would.
pub struct QueryBuilder {
    id: u16,
    domain: String,
    qtype: u16,
    flags: u16,
}

impl QueryBuilder {
    pub fn new(domain: &str) -> Self {
        Self {
            id: 0x1234,
            domain: domain.to_string(),
            qtype: QTYPE_A,
            flags: 0x0100,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(12 + self.domain.len() + 6);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        for label in self.domain.split('.').filter(|l| !l.is_empty()) {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf
    }
}

pub struct UpstreamBuilder;

impl UpstreamBuilder {
    pub fn local(addr: SocketAddr) -> UpstreamAddr {
        UpstreamAddr::Resolved(addr)
    }

    /// A loopback port nothing listens on.
    pub async fn unreachable() -> UpstreamAddr {
        let socket = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        drop(socket);
        UpstreamAddr::Resolved(addr)
    }
}
