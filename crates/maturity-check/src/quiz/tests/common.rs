use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::quiz::catalog::{AnswerOption, Question, QuestionCatalog};
use crate::quiz::repository::{ConfigRepository, RepositoryError, StoredConfig};
use crate::quiz::resolver::EffectiveConfig;
use crate::quiz::tiers::{Bullet, BulletKind, ResultTier, TierTable};
use crate::quiz::{quiz_router, QuizService};

/// Question with options worth 3, 2, 1 and 0 points.
pub(super) fn four_option_question(id: u32) -> Question {
    Question {
        id,
        category: format!("Kategori {id}"),
        text: format!("Spørgsmål {id}?"),
        options: [3, 2, 1, 0]
            .into_iter()
            .map(|points| AnswerOption {
                label: None,
                text: format!("{points} point"),
                points,
            })
            .collect(),
    }
}

pub(super) fn ten_question_catalog() -> QuestionCatalog {
    QuestionCatalog::new((1..=10).map(four_option_question).collect()).expect("valid catalog")
}

pub(super) fn tier(min: u32, max: u32, title: &str) -> ResultTier {
    ResultTier {
        min,
        max,
        title: title.to_string(),
        description: format!("{title} description"),
        bullets: vec![Bullet {
            kind: BulletKind::Strength,
            text: format!("{title} strength"),
        }],
    }
}

pub(super) fn standard_tiers() -> TierTable {
    TierTable::new(vec![
        tier(0, 10, "Ad hoc"),
        tier(11, 18, "Fundament"),
        tier(19, 24, "Struktureret"),
        tier(25, 30, "Strategisk"),
    ])
    .expect("non-empty table")
}

/// Same brackets with nothing covering a score of 12.
pub(super) fn gapped_tiers() -> TierTable {
    TierTable::new(vec![
        tier(0, 11, "Ad hoc"),
        tier(13, 18, "Fundament"),
        tier(19, 30, "Struktureret"),
    ])
    .expect("non-empty table")
}

pub(super) fn effective_config() -> EffectiveConfig {
    EffectiveConfig {
        questions: ten_question_catalog(),
        results: standard_tiers(),
        ..EffectiveConfig::default()
    }
}

pub(super) fn build_service() -> (QuizService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = QuizService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(service: QuizService<MemoryRepository>) -> axum::Router {
    quiz_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) record: Arc<Mutex<Option<StoredConfig>>>,
    pub(super) saves: Arc<Mutex<usize>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self) -> Option<StoredConfig> {
        self.record.lock().expect("repository mutex poisoned").clone()
    }

    pub(super) fn save_count(&self) -> usize {
        *self.saves.lock().expect("counter mutex poisoned")
    }
}

impl ConfigRepository for MemoryRepository {
    fn load(&self) -> Result<Option<StoredConfig>, RepositoryError> {
        Ok(self.stored())
    }

    fn save(&self, record: StoredConfig) -> Result<StoredConfig, RepositoryError> {
        *self.record.lock().expect("repository mutex poisoned") = Some(record.clone());
        *self.saves.lock().expect("counter mutex poisoned") += 1;
        Ok(record)
    }
}

pub(super) struct UnavailableRepository;

impl ConfigRepository for UnavailableRepository {
    fn load(&self) -> Result<Option<StoredConfig>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn save(&self, _record: StoredConfig) -> Result<StoredConfig, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
