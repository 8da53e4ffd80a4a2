use super::server::DnsServerHandler;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use zonerelay_domain::DomainError;

/// Largest datagram read from a client.
pub const MAX_DATAGRAM_SIZE: usize = 4096;

/// Drains one UDP socket, answering each datagram before reading the next.
pub struct UdpListener {
    socket: UdpSocket,
    handler: Arc<DnsServerHandler>,
}

impl UdpListener {
    pub fn new(socket: UdpSocket, handler: Arc<DnsServerHandler>) -> Self {
        Self { socket, handler }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serves until `shutdown` is cancelled. A read still pending at
    /// cancellation is abandoned; a datagram already read is answered first.
    pub async fn run(self, shutdown: CancellationToken) {
        let local = self.local_addr().ok();
        info!(bind_address = ?local, "DNS listener started");

        let mut recv_buf = vec![0u8; MAX_DATAGRAM_SIZE];

        loop {
            let received = tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                result = self.socket.recv_from(&mut recv_buf) => result,
            };

            let (len, client) = match received {
                Ok(received) => received,
                Err(e) => {
                    let e = DomainError::SocketError(format!("recv_from failed: {}", e));
                    error!(error = %e, "UDP read failed");
                    continue;
                }
            };

            let Some(response) = self.handler.handle_datagram(&recv_buf[..len], client).await
            else {
                continue;
            };

            match self.socket.send_to(&response, client).await {
                Ok(sent) => debug!(client = %client, bytes = sent, "Reply sent"),
                Err(e) => {
                    let e = DomainError::SocketError(format!("send_to {} failed: {}", client, e));
                    error!(error = %e, "UDP write failed");
                }
            }
        }

        info!("DNS listener stopped");
    }
}
