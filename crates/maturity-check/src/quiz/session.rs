//! One respondent's pass through the quiz.
//!
//! The session owns its answers and borrows the effective configuration it was started
//! against, so every presentation layer drives the same transitions.

use super::catalog::Question;
use super::resolver::EffectiveConfig;
use super::scoring::{assess, compute_score, AnswerSet, Assessment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress { index: usize, answers: AnswerSet },
    Completed { answers: AnswerSet },
}

impl SessionState {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress { .. } => "in progress",
            Self::Completed { .. } => "completed",
        }
    }
}

/// Transition refused in the current state. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("quiz already started")]
    AlreadyStarted,
    #[error("quiz is not in progress")]
    NotInProgress,
    #[error("question {index} has no answer yet")]
    Unanswered { index: usize },
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("question {index} has no option {option}")]
    UnknownOption { index: usize, option: usize },
}

#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    config: &'a EffectiveConfig,
    state: SessionState,
}

impl<'a> QuizSession<'a> {
    pub fn new(config: &'a EffectiveConfig) -> Self {
        Self {
            config,
            state: SessionState::NotStarted,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &'a EffectiveConfig {
        self.config
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::NotStarted => {
                self.state = SessionState::InProgress {
                    index: 0,
                    answers: AnswerSet::new(),
                };
                Ok(())
            }
            _ => Err(SessionError::AlreadyStarted),
        }
    }

    /// Records `points` for the current question, overwriting an earlier choice.
    pub fn answer(&mut self, points: u32) -> Result<(), SessionError> {
        match &mut self.state {
            SessionState::InProgress { index, answers } => {
                answers.record(*index, points);
                Ok(())
            }
            _ => Err(SessionError::NotInProgress),
        }
    }

    /// Answers with the points carried by option `option` of the current question.
    pub fn choose(&mut self, option: usize) -> Result<(), SessionError> {
        let SessionState::InProgress { index, .. } = self.state else {
            return Err(SessionError::NotInProgress);
        };
        let points = self
            .config
            .questions
            .get(index)
            .and_then(|question| question.option(option))
            .map(|choice| choice.points)
            .ok_or(SessionError::UnknownOption { index, option })?;
        self.answer(points)
    }

    pub fn advance(&mut self) -> Result<(), SessionError> {
        let last_index = self.config.questions.last_index();
        let state = std::mem::replace(&mut self.state, SessionState::NotStarted);

        let (next, result) = match state {
            SessionState::InProgress { index, answers } if !answers.contains(index) => (
                SessionState::InProgress { index, answers },
                Err(SessionError::Unanswered { index }),
            ),
            SessionState::InProgress { index, answers } if index >= last_index => {
                (SessionState::Completed { answers }, Ok(()))
            }
            SessionState::InProgress { index, answers } => (
                SessionState::InProgress {
                    index: index + 1,
                    answers,
                },
                Ok(()),
            ),
            other => (other, Err(SessionError::NotInProgress)),
        };

        self.state = next;
        result
    }

    pub fn retreat(&mut self) -> Result<(), SessionError> {
        match &mut self.state {
            SessionState::InProgress { index: 0, .. } => Err(SessionError::AtFirstQuestion),
            SessionState::InProgress { index, .. } => {
                *index -= 1;
                Ok(())
            }
            _ => Err(SessionError::NotInProgress),
        }
    }

    pub fn reset(&mut self) {
        self.state = SessionState::NotStarted;
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { index, .. } => Some(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.current_index()
            .and_then(|index| self.config.questions.get(index))
    }

    /// Points already recorded for the question on screen.
    pub fn current_selection(&self) -> Option<u32> {
        match &self.state {
            SessionState::InProgress { index, answers } => answers.get(*index),
            _ => None,
        }
    }

    /// 1-based position and total, as shown in the "3 / 10" header.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.current_index()
            .map(|index| (index + 1, self.config.questions.len()))
    }

    pub fn answers(&self) -> Option<&AnswerSet> {
        match &self.state {
            SessionState::NotStarted => None,
            SessionState::InProgress { answers, .. } | SessionState::Completed { answers } => {
                Some(answers)
            }
        }
    }

    pub fn score(&self) -> u32 {
        self.answers().map(compute_score).unwrap_or(0)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed { .. })
    }

    /// Score and tier once the last question has been passed.
    pub fn outcome(&self) -> Option<Assessment> {
        match &self.state {
            SessionState::Completed { answers } => Some(assess(answers, self.config)),
            _ => None,
        }
    }
}
