pub mod zone_file_repository;

pub use zone_file_repository::ZoneFileRepository;
