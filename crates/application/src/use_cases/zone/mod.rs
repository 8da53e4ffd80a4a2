pub mod add_zone_record;
pub mod load_zone;

pub use add_zone_record::AddZoneRecordUseCase;
pub use load_zone::LoadZoneUseCase;
