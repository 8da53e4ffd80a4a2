pub mod dns;

pub use dns::bind_dns_listener;
