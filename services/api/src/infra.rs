use maturity_check::error::AppError;
use maturity_check::quiz::{
    resolve_config, ConfigRepository, EffectiveConfig, JsonFileConfigRepository, QuizService,
    RepositoryError, StoredConfig,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store; the record is lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryConfigRepository {
    record: Arc<Mutex<Option<StoredConfig>>>,
}

impl ConfigRepository for InMemoryConfigRepository {
    fn load(&self) -> Result<Option<StoredConfig>, RepositoryError> {
        let guard = self
            .record
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, record: StoredConfig) -> Result<StoredConfig, RepositoryError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        *guard = Some(record.clone());
        Ok(record)
    }
}

/// Effective configuration for one-shot CLI commands. Without a store only defaults apply.
pub(crate) fn load_effective_config(store: Option<&Path>) -> Result<EffectiveConfig, AppError> {
    match store {
        Some(path) => {
            let repository = Arc::new(JsonFileConfigRepository::open(path)?);
            Ok(QuizService::new(repository).effective())
        }
        None => Ok(resolve_config(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_check::quiz::QuizConfig;
    use tempfile::TempDir;

    #[test]
    fn in_memory_repository_keeps_last_write() {
        let repository = InMemoryConfigRepository::default();
        assert!(repository.load().expect("load succeeds").is_none());

        let first = QuizConfig {
            title: Some("Første".to_string()),
            ..QuizConfig::default()
        };
        let second = QuizConfig {
            title: Some("Anden".to_string()),
            ..QuizConfig::default()
        };
        repository
            .save(StoredConfig::new(first, None))
            .expect("save succeeds");
        repository
            .save(StoredConfig::new(second.clone(), None))
            .expect("save succeeds");

        let loaded = repository.load().expect("load succeeds").expect("record");
        assert_eq!(loaded.config, second);
    }

    #[test]
    fn store_backed_config_overrides_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.json");
        let repository = JsonFileConfigRepository::open(&path).expect("opens");
        repository
            .save(StoredConfig::new(
                QuizConfig {
                    button_text: Some("Tag testen".to_string()),
                    ..QuizConfig::default()
                },
                None,
            ))
            .expect("save succeeds");

        let config = load_effective_config(Some(&path)).expect("loads");
        assert_eq!(config.button_text, "Tag testen");
        assert_eq!(config.questions.len(), 10);

        let defaults = load_effective_config(None).expect("loads");
        assert_eq!(defaults, EffectiveConfig::default());
    }
}
