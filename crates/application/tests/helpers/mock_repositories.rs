#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use zonerelay_application::ports::{UpstreamForwarder, UpstreamReply, ZoneRepository};
use zonerelay_domain::{DomainError, ZoneRecord};

#[derive(Clone, Default)]
pub struct MockZoneRepository {
    records: Arc<Mutex<Vec<ZoneRecord>>>,
    fail_load: Arc<Mutex<Option<DomainError>>>,
    fail_append: Arc<Mutex<bool>>,
}

impl MockZoneRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ZoneRecord>) -> Self {
        let repo = Self::new();
        *repo.records.lock().unwrap() = records;
        repo
    }

    pub fn set_load_error(&self, error: DomainError) {
        *self.fail_load.lock().unwrap() = Some(error);
    }

    pub fn set_should_fail_append(&self, should_fail: bool) {
        *self.fail_append.lock().unwrap() = should_fail;
    }

    pub fn stored(&self) -> Vec<ZoneRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    async fn load_all(&self) -> Result<Vec<ZoneRecord>, DomainError> {
        if let Some(error) = self.fail_load.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn append(&self, record: &ZoneRecord) -> Result<(), DomainError> {
        if *self.fail_append.lock().unwrap() {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Forwarder that answers from a canned table keyed by the raw query bytes.
#[derive(Clone, Default)]
pub struct MockUpstreamForwarder {
    replies: Arc<Mutex<HashMap<Vec<u8>, UpstreamReply>>>,
    default_reply: Arc<Mutex<Option<UpstreamReply>>>,
    calls: Arc<AtomicUsize>,
}

impl MockUpstreamForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reply(&self, query: &[u8], bytes: Vec<u8>) {
        self.replies.lock().unwrap().insert(
            query.to_vec(),
            UpstreamReply {
                bytes,
                upstream: "127.0.0.1:5300".to_string(),
            },
        );
    }

    pub fn set_default_reply(&self, bytes: Vec<u8>) {
        *self.default_reply.lock().unwrap() = Some(UpstreamReply {
            bytes,
            upstream: "127.0.0.1:5300".to_string(),
        });
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(&self, query: &[u8]) -> Result<UpstreamReply, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reply) = self.replies.lock().unwrap().get(query) {
            return Ok(reply.clone());
        }
        self.default_reply
            .lock()
            .unwrap()
            .clone()
            .ok_or(DomainError::AllUpstreamsFailed)
    }
}
