use async_trait::async_trait;
use zonerelay_domain::{DomainError, ZoneRecord};

/// Durable storage behind the zone table.
#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Every record, in storage order.
    async fn load_all(&self) -> Result<Vec<ZoneRecord>, DomainError>;

    /// Persist one more record after the existing ones.
    async fn append(&self, record: &ZoneRecord) -> Result<(), DomainError>;
}
