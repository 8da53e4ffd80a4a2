//! zonerelay domain layer
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod upstream_addr;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordType, ZoneRecord, ANSWER_TTL};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use upstream_addr::UpstreamAddr;
