use crate::ports::ZoneRepository;
use crate::services::ZoneStore;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::info;
use zonerelay_domain::{DomainError, RecordType, ZoneRecord};

pub struct AddZoneRecordUseCase {
    zone: Arc<ZoneStore>,
    repo: Arc<dyn ZoneRepository>,
}

impl AddZoneRecordUseCase {
    pub fn new(zone: Arc<ZoneStore>, repo: Arc<dyn ZoneRepository>) -> Self {
        Self { zone, repo }
    }

    /// Validates, persists, then publishes the record to the live zone.
    pub async fn execute(
        &self,
        name: &str,
        record_type: &str,
        value: &str,
    ) -> Result<ZoneRecord, DomainError> {
        let record = Self::validate(name, record_type, value)?;

        self.repo.append(&record).await.map_err(|e| match e {
            DomainError::IoError(_) => e,
            other => DomainError::IoError(format!("Failed to save zone record: {}", other)),
        })?;

        self.zone.append(record.clone());
        info!(
            name = %record.name,
            record_type = %record.record_type,
            value = %record.value,
            "Zone record added"
        );
        Ok(record)
    }

    fn validate(name: &str, record_type: &str, value: &str) -> Result<ZoneRecord, DomainError> {
        let name = name.trim();
        let value = value.trim();

        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(DomainError::InvalidRecord(format!(
                "Invalid record name '{}'",
                name
            )));
        }

        let parsed_type: RecordType = record_type
            .trim()
            .parse()
            .map_err(DomainError::InvalidRecord)?;

        let value_ok = match parsed_type {
            RecordType::A => value.parse::<Ipv4Addr>().is_ok(),
            RecordType::AAAA => value.parse::<Ipv6Addr>().is_ok(),
            RecordType::CNAME => !value.is_empty() && !value.contains(char::is_whitespace),
        };
        if !value_ok {
            return Err(DomainError::InvalidRecord(format!(
                "Invalid {} value '{}'",
                parsed_type, value
            )));
        }

        Ok(ZoneRecord::new(name, parsed_type.as_str(), value))
    }
}
