#![allow(dead_code)]
use zonerelay_domain::ZoneRecord;

pub struct ZoneRecordBuilder {
    name: String,
    record_type: String,
    value: String,
}

impl ZoneRecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: "A".to_string(),
            value: "192.0.2.1".to_string(),
        }
    }

    pub fn a(mut self, value: &str) -> Self {
        self.record_type = "A".to_string();
        self.value = value.to_string();
        self
    }

    pub fn aaaa(mut self, value: &str) -> Self {
        self.record_type = "AAAA".to_string();
        self.value = value.to_string();
        self
    }

    pub fn cname(mut self, target: &str) -> Self {
        self.record_type = "CNAME".to_string();
        self.value = target.to_string();
        self
    }

    pub fn raw_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn build(self) -> ZoneRecord {
        ZoneRecord::new(self.name, self.record_type, self.value)
    }
}
