use serde::{Deserialize, Serialize};

/// A single answer choice. `points` is what the choice contributes to the total score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub category: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Highest point value among the options; zero for a question without options.
    pub fn max_points(&self) -> u32 {
        self.options
            .iter()
            .map(|option| option.points)
            .max()
            .unwrap_or(0)
    }

    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    pub fn accepts(&self, points: u32) -> bool {
        self.options.iter().any(|option| option.points == points)
    }

    /// Display letter for an option, falling back to A, B, C... by position.
    pub fn option_label(&self, index: usize) -> String {
        match self.options.get(index).and_then(|option| option.label.clone()) {
            Some(label) => label,
            None => positional_label(index),
        }
    }
}

fn positional_label(index: usize) -> String {
    let letters = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    match letters.get(index) {
        Some(letter) => char::from(*letter).to_string(),
        None => (index + 1).to_string(),
    }
}

/// Reasons a list of questions cannot be used as a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question catalog is empty")]
    Empty,
    #[error("question {id} has no answer options")]
    QuestionWithoutOptions { id: u32 },
}

/// Ordered, non-empty set of questions. Every question carries at least one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(question) = questions.iter().find(|question| question.options.is_empty()) {
            return Err(CatalogError::QuestionWithoutOptions { id: question.id });
        }
        Ok(Self { questions })
    }

    /// Wraps compiled-in questions, which the default tests keep well-formed.
    pub(crate) fn from_defaults(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    /// Sum of every question's highest option; the denominator shown next to a score.
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .map(Question::max_points)
            .fold(0u32, u32::saturating_add)
    }
}

impl TryFrom<Vec<Question>> for QuestionCatalog {
    type Error = CatalogError;

    fn try_from(value: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionCatalog> for Vec<Question> {
    fn from(value: QuestionCatalog) -> Self {
        value.questions
    }
}

impl<'a> IntoIterator for &'a QuestionCatalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
