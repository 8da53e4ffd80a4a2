use std::sync::Arc;
use zonerelay_domain::Config;
use zonerelay_infrastructure::repositories::ZoneFileRepository;

pub struct Repositories {
    pub zone: Arc<ZoneFileRepository>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        Self {
            zone: Arc::new(ZoneFileRepository::new(&config.zone.file)),
        }
    }
}
