pub mod forwarding;
pub mod listener;
pub mod server;
pub mod transport;
pub mod wire;

pub use forwarding::UdpForwarder;
pub use listener::UdpListener;
pub use server::DnsServerHandler;
