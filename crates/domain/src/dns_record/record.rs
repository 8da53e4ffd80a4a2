use super::RecordType;
use std::sync::Arc;

/// One line of the zone: `<name> <type> <value>`.
///
/// `record_type` keeps the textual type exactly as it was loaded; use
/// [`ZoneRecord::parsed_type`] to get the wire type when it is one we answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    pub name: Arc<str>,

    pub record_type: Arc<str>,

    pub value: Arc<str>,
}

impl ZoneRecord {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: impl Into<Arc<str>>,
        value: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            value: value.into(),
        }
    }

    pub fn parsed_type(&self) -> Option<RecordType> {
        self.record_type.parse().ok()
    }

    pub fn matches(&self, domain: &str) -> bool {
        &*self.name == domain
    }
}
