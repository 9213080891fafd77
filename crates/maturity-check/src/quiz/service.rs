use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

use super::repository::{ConfigRepository, RepositoryError, StoredConfig};
use super::resolver::{resolve_config, EffectiveConfig, QuizConfig};
use super::scoring::{assess, AnswerSet, Assessment};
use super::validation::{check_answers, parse_update, AssessmentError, ValidationError};

/// Service composing configuration persistence, resolution, and scoring.
pub struct QuizService<R> {
    repository: Arc<R>,
}

impl<R> QuizService<R>
where
    R: ConfigRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stored configuration, writing the default row first if none exists yet.
    pub fn config(&self) -> Result<StoredConfig, QuizServiceError> {
        if let Some(record) = self.repository.load()? {
            return Ok(record);
        }

        let seeded = self
            .repository
            .save(StoredConfig::new(QuizConfig::seed(), Some(Utc::now())))?;
        info!("seeded default quiz configuration");
        Ok(seeded)
    }

    /// Validate and persist a configuration write, replacing the stored record.
    pub fn update(&self, payload: Value) -> Result<StoredConfig, QuizServiceError> {
        let config = parse_update(payload)?;

        let preview = resolve_config(Some(&config));
        for issue in preview.results.audit(preview.questions.max_score()) {
            warn!(%issue, "result tier table defect");
        }

        let stored = self
            .repository
            .save(StoredConfig::new(config, Some(Utc::now())))?;
        info!(
            questions = preview.questions.len(),
            tiers = preview.results.len(),
            "quiz configuration saved"
        );
        Ok(stored)
    }

    /// Effective configuration. Storage failures degrade to the compiled-in defaults.
    pub fn effective(&self) -> EffectiveConfig {
        match self.repository.load() {
            Ok(record) => resolve_config(record.as_ref().map(|record| &record.config)),
            Err(error) => {
                warn!(%error, "configuration unavailable, rendering defaults");
                EffectiveConfig::default()
            }
        }
    }

    pub fn assess(&self, answers: &AnswerSet) -> Result<Assessment, QuizServiceError> {
        let config = self.effective();
        check_answers(answers, &config.questions)?;
        Ok(assess(answers, &config))
    }
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
