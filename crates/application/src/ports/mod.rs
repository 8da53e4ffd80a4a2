mod upstream_forwarder;
mod zone_repository;

pub use upstream_forwarder::{UpstreamForwarder, UpstreamReply};
pub use zone_repository::ZoneRepository;
