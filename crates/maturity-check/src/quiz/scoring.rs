use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::resolver::EffectiveConfig;
use super::tiers::{ResultTier, TierTable};

/// Selected points keyed by 0-based question position. At most one entry per question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    selections: BTreeMap<usize, u32>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `points` for `question`, replacing any earlier selection.
    pub fn record(&mut self, question: usize, points: u32) -> Option<u32> {
        self.selections.insert(question, points)
    }

    pub fn get(&self, question: usize) -> Option<u32> {
        self.selections.get(&question).copied()
    }

    pub fn contains(&self, question: usize) -> bool {
        self.selections.contains_key(&question)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.selections
            .iter()
            .map(|(question, points)| (*question, *points))
    }
}

impl FromIterator<(usize, u32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (usize, u32)>>(iter: T) -> Self {
        let mut answers = AnswerSet::new();
        for (question, points) in iter {
            answers.record(question, points);
        }
        answers
    }
}

/// Sum of every recorded selection. Unanswered questions contribute nothing.
pub fn compute_score(answers: &AnswerSet) -> u32 {
    answers
        .iter()
        .fold(0u32, |total, (_, points)| total.saturating_add(points))
}

/// First tier containing `score`, or the table's first tier when nothing matches.
pub fn resolve_tier(score: u32, tiers: &TierTable) -> &ResultTier {
    tiers.matching(score).unwrap_or_else(|| tiers.first())
}

/// Score and tier for an answer set evaluated against an effective configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub score: u32,
    pub max_score: u32,
    pub answered: usize,
    pub total_questions: usize,
    pub complete: bool,
    pub tier: ResultTier,
}

pub fn assess(answers: &AnswerSet, config: &EffectiveConfig) -> Assessment {
    let score = compute_score(answers);
    let total_questions = config.questions.len();
    let answered = (0..total_questions)
        .filter(|index| answers.contains(*index))
        .count();

    Assessment {
        score,
        max_score: config.questions.max_score(),
        answered,
        total_questions,
        complete: answered == total_questions,
        tier: resolve_tier(score, &config.results).clone(),
    }
}
