use super::Repositories;
use std::sync::Arc;
use zonerelay_application::services::ZoneStore;
use zonerelay_application::use_cases::{AddZoneRecordUseCase, LoadZoneUseCase};
use zonerelay_domain::DomainError;

pub struct UseCases {
    pub zone: Arc<ZoneStore>,
    pub add_record: Arc<AddZoneRecordUseCase>,
}

impl UseCases {
    /// Loads the zone file; a failure here is fatal.
    pub async fn new(repos: &Repositories) -> Result<Self, DomainError> {
        let zone = Arc::new(LoadZoneUseCase::new(repos.zone.clone()).execute().await?);

        Ok(Self {
            add_record: Arc::new(AddZoneRecordUseCase::new(
                Arc::clone(&zone),
                repos.zone.clone(),
            )),
            zone,
        })
    }
}
