use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::{Question, QuestionCatalog};
use super::defaults;
use super::tiers::{ResultTier, TierTable};

/// Editable quiz configuration as stored and exchanged over HTTP. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizConfig {
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub questions_data: Option<Vec<Question>>,
    #[serde(default)]
    pub results_data: Option<Vec<ResultTier>>,
}

impl QuizConfig {
    /// The row written on first read: default copy and colors, empty lists.
    pub fn seed() -> Self {
        Self {
            primary_color: Some(defaults::PRIMARY_COLOR.to_string()),
            secondary_color: Some(defaults::SECONDARY_COLOR.to_string()),
            title: Some(defaults::TITLE.to_string()),
            subtitle: Some(defaults::SUBTITLE.to_string()),
            description: Some(defaults::DESCRIPTION.to_string()),
            button_text: Some(defaults::BUTTON_TEXT.to_string()),
            questions_data: Some(Vec::new()),
            results_data: Some(Vec::new()),
        }
    }
}

/// Fully populated configuration used for rendering and scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub button_text: String,
    #[serde(rename = "questionsData")]
    pub questions: QuestionCatalog,
    #[serde(rename = "resultsData")]
    pub results: TierTable,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            primary_color: defaults::PRIMARY_COLOR.to_string(),
            secondary_color: defaults::SECONDARY_COLOR.to_string(),
            title: defaults::TITLE.to_string(),
            subtitle: defaults::SUBTITLE.to_string(),
            description: defaults::DESCRIPTION.to_string(),
            button_text: defaults::BUTTON_TEXT.to_string(),
            questions: defaults::catalog(),
            results: defaults::tier_table(),
        }
    }
}

/// Merge `remote` over the compiled-in defaults, field by field.
///
/// Blank scalars and empty or malformed lists fall back to their defaults; lists are taken
/// wholesale and never merged element by element. `None` yields the all-defaults configuration.
pub fn resolve_config(remote: Option<&QuizConfig>) -> EffectiveConfig {
    let mut effective = EffectiveConfig::default();
    let Some(remote) = remote else {
        return effective;
    };

    override_scalar(&mut effective.primary_color, &remote.primary_color);
    override_scalar(&mut effective.secondary_color, &remote.secondary_color);
    override_scalar(&mut effective.title, &remote.title);
    override_scalar(&mut effective.subtitle, &remote.subtitle);
    override_scalar(&mut effective.description, &remote.description);
    override_scalar(&mut effective.button_text, &remote.button_text);

    if let Some(questions) = remote.questions_data.as_ref().filter(|list| !list.is_empty()) {
        match QuestionCatalog::new(questions.clone()) {
            Ok(catalog) => effective.questions = catalog,
            Err(error) => warn!(%error, "stored questions unusable, using default catalog"),
        }
    }

    if let Some(results) = remote.results_data.as_ref() {
        if let Ok(table) = TierTable::new(results.clone()) {
            effective.results = table;
        }
    }

    effective
}

fn override_scalar(target: &mut String, candidate: &Option<String>) {
    if let Some(value) = candidate.as_deref().filter(|value| !value.trim().is_empty()) {
        *target = value.to_string();
    }
}
