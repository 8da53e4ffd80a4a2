pub mod dns;
pub mod zone;

pub use dns::{DnsAnswer, HandleDnsQueryUseCase};
pub use zone::{AddZoneRecordUseCase, LoadZoneUseCase};
