use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use zonerelay_infrastructure::dns::{DnsServerHandler, UdpListener};

const SOCKET_BUFFER_SIZE: usize = 512 * 1024;

/// Binds the DNS socket and wraps it in a listener ready to run.
pub fn bind_dns_listener(
    bind_addr: &str,
    handler: Arc<DnsServerHandler>,
) -> anyhow::Result<UdpListener> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = create_udp_socket(socket_addr)?;

    let listener = UdpListener::new(socket, handler);
    info!(bind_address = %listener.local_addr()?, "DNS server ready");
    Ok(listener)
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<tokio::net::UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(tokio::net::UdpSocket::from_std(std_socket)?)
}
