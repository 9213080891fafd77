use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resolver::QuizConfig;

/// Identifier of the only configuration record.
pub const SINGLETON_ID: &str = "default";

/// Persisted configuration row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    pub id: String,
    #[serde(flatten)]
    pub config: QuizConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StoredConfig {
    pub fn new(config: QuizConfig, updated_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            config,
            updated_at,
        }
    }
}

/// Storage abstraction for the singleton configuration record.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Option<StoredConfig>, RepositoryError>;
    /// Replaces the stored record in full and returns what was written.
    fn save(&self, record: StoredConfig) -> Result<StoredConfig, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("configuration store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Keeps the record as a flat JSON document on disk.
#[derive(Debug)]
pub struct JsonFileConfigRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileConfigRepository {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

impl ConfigRepository for JsonFileConfigRepository {
    fn load(&self) -> Result<Option<StoredConfig>, RepositoryError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        let record = serde_json::from_slice(&bytes)?;
        Ok(Some(record))
    }

    fn save(&self, record: StoredConfig) -> Result<StoredConfig, RepositoryError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store lock poisoned".to_string()))?;

        let bytes = serde_json::to_vec_pretty(&record)?;
        let staging = self.staging_path();
        fs::write(&staging, bytes)?;
        fs::rename(&staging, &self.path)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_means_no_record() {
        let dir = TempDir::new().expect("temp dir");
        let repository =
            JsonFileConfigRepository::open(dir.path().join("nested/config.json")).expect("opens");

        assert!(repository.load().expect("load succeeds").is_none());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn saved_record_survives_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.json");

        let config = QuizConfig {
            primary_color: Some("#000000".to_string()),
            ..QuizConfig::default()
        };
        let written = JsonFileConfigRepository::open(&path)
            .expect("opens")
            .save(StoredConfig::new(config, Some(Utc::now())))
            .expect("save succeeds");

        let reopened = JsonFileConfigRepository::open(&path).expect("reopens");
        let loaded = reopened.load().expect("load succeeds").expect("record present");
        assert_eq!(loaded, written);
        assert_eq!(loaded.id, SINGLETON_ID);
        assert!(!reopened.staging_path().exists());
    }

    #[test]
    fn corrupt_document_is_reported() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").expect("write");

        let repository = JsonFileConfigRepository::open(&path).expect("opens");
        assert!(matches!(repository.load(), Err(RepositoryError::Corrupt(_))));
    }

    #[test]
    fn record_serializes_flat_with_camel_case_keys() {
        let record = StoredConfig::new(QuizConfig::seed(), None);
        let value = serde_json::to_value(&record).expect("serializes");

        assert_eq!(value["id"], "default");
        assert_eq!(value["buttonText"], "Start testen nu");
        assert_eq!(value["questionsData"], serde_json::json!([]));
        assert!(value.get("updatedAt").is_none());
    }
}
