use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};
use zonerelay_application::ports::ZoneRepository;
use zonerelay_domain::{DomainError, ZoneRecord};

/// Zone records kept in a whitespace separated text file, one
/// `<name> <class> <type> <value>` record per line.
pub struct ZoneFileRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ZoneFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_error(&self, reason: impl ToString) -> DomainError {
        DomainError::ZoneLoadError {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Parses one zone file line. Comments (`;`), blank lines and lines with
/// fewer than four fields yield `None`; the class column is not kept.
pub fn parse_zone_line(line: &str) -> Option<ZoneRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(';') {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        debug!(line = %line, fields = fields.len(), "Skipping short zone line");
        return None;
    }

    Some(ZoneRecord::new(fields[0], fields[2], fields[3]))
}

pub fn format_zone_line(record: &ZoneRecord) -> String {
    format!("{} IN {} {}\n", record.name, record.record_type, record.value)
}

#[async_trait]
impl ZoneRepository for ZoneFileRepository {
    async fn load_all(&self) -> Result<Vec<ZoneRecord>, DomainError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.load_error(e))?;

        let records: Vec<ZoneRecord> = content.lines().filter_map(parse_zone_line).collect();

        info!(path = %self.path.display(), records = records.len(), "Zone file loaded");
        Ok(records)
    }

    async fn append(&self, record: &ZoneRecord) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let needs_newline = match fs::read(&self.path).await {
            Ok(existing) => existing.last().is_some_and(|&b| b != b'\n'),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(DomainError::IoError(e.to_string())),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))?;

        let mut line = String::new();
        if needs_newline {
            line.push('\n');
        }
        line.push_str(&format_zone_line(record));

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;

        debug!(path = %self.path.display(), name = %record.name, "Zone record persisted");
        Ok(())
    }
}
