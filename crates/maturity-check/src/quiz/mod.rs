//! Onboarding maturity quiz: question catalog, result tiers, scoring, sessions, and the
//! configuration that feeds them.
//!
//! Scoring and resolution are pure. Persistence sits behind [`ConfigRepository`] so the
//! service and router can run against a JSON document on disk or an in-memory store.

pub mod catalog;
pub mod defaults;
pub mod repository;
pub mod resolver;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod tiers;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{AnswerOption, CatalogError, Question, QuestionCatalog};
pub use repository::{
    ConfigRepository, JsonFileConfigRepository, RepositoryError, StoredConfig, SINGLETON_ID,
};
pub use resolver::{resolve_config, EffectiveConfig, QuizConfig};
pub use router::{quiz_router, AssessmentRequest};
pub use scoring::{assess, compute_score, resolve_tier, AnswerSet, Assessment};
pub use service::{QuizService, QuizServiceError};
pub use session::{QuizSession, SessionError, SessionState};
pub use tiers::{Bullet, BulletKind, EmptyTierTable, ResultTier, TierIssue, TierTable};
pub use validation::{AssessmentError, ValidationError};
