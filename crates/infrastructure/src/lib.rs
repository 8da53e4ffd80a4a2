//! zonerelay infrastructure: DNS wire codec, UDP forwarding and listening,
//! zone file storage.
pub mod dns;
pub mod repositories;
