use crate::ports::ZoneRepository;
use crate::services::ZoneStore;
use std::sync::Arc;
use tracing::info;
use zonerelay_domain::DomainError;

pub struct LoadZoneUseCase {
    repo: Arc<dyn ZoneRepository>,
}

impl LoadZoneUseCase {
    pub fn new(repo: Arc<dyn ZoneRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<ZoneStore, DomainError> {
        let records = self.repo.load_all().await?;
        info!(count = records.len(), "Zone loaded");
        Ok(ZoneStore::new(records))
    }
}
