use std::net::SocketAddr;
use std::time::Duration;
use zonerelay_domain::{DomainError, UpstreamAddr};

/// Resolves an upstream to the socket address to dial. Host names go through
/// the system resolver; the first address returned wins.
pub async fn resolve_upstream(
    upstream: &UpstreamAddr,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    let (hostname, port) = match upstream {
        UpstreamAddr::Resolved(addr) => return Ok(*addr),
        UpstreamAddr::Unresolved { hostname, port } => (hostname, *port),
    };

    let target = format!("{}:{}", hostname, port);

    let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::QueryTimeout)?
        .map_err(|e| DomainError::UpstreamUnavailable {
            server: target.clone(),
            reason: format!("name resolution failed: {}", e),
        })?;

    addrs.next().ok_or_else(|| DomainError::UpstreamUnavailable {
        server: target.clone(),
        reason: "no addresses found".to_string(),
    })
}
