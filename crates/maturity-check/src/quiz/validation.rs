use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use super::catalog::QuestionCatalog;
use super::resolver::QuizConfig;
use super::scoring::AnswerSet;

/// Rejected configuration write. Nothing is persisted when one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("configuration body must be a JSON object")]
    NotAnObject,
    #[error("invalid configuration: {0}")]
    Schema(String),
    #[error("question {id} has no answer options")]
    QuestionWithoutOptions { id: u32 },
    #[error("question id {id} is used more than once")]
    DuplicateQuestionId { id: u32 },
    #[error("result tier {index} has min {min} above max {max}")]
    InvertedTier { index: usize, min: u32, max: u32 },
}

/// Rejected answer set submitted for assessment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("question {index} does not exist")]
    UnknownQuestion { index: usize },
    #[error("question {index} has no option worth {points} points")]
    InvalidPoints { index: usize, points: u32 },
    #[error("invalid assessment request: {0}")]
    Malformed(String),
}

/// Body of an assessment request: selected points keyed by question position.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub answers: AnswerSet,
}

/// Reads a configuration write body. Fields are optional, but present fields must have the
/// declared type; `null` counts as absent and unknown keys (including `id`) are ignored.
pub fn parse_update(payload: Value) -> Result<QuizConfig, ValidationError> {
    let Value::Object(fields) = payload else {
        return Err(ValidationError::NotAnObject);
    };

    let config: QuizConfig = serde_json::from_value(Value::Object(fields))
        .map_err(|err| ValidationError::Schema(err.to_string()))?;
    check_config(&config)?;
    Ok(config)
}

/// Reads an assessment body. Keys must be question positions and values non-negative points.
pub fn parse_answers(payload: Value) -> Result<AnswerSet, AssessmentError> {
    if !payload.is_object() {
        return Err(AssessmentError::Malformed(
            "body must be a JSON object".to_string(),
        ));
    }
    let request: AssessmentRequest = serde_json::from_value(payload)
        .map_err(|err| AssessmentError::Malformed(err.to_string()))?;
    Ok(request.answers)
}

pub fn check_config(config: &QuizConfig) -> Result<(), ValidationError> {
    if let Some(questions) = &config.questions_data {
        let mut seen = HashSet::new();
        for question in questions {
            if question.options.is_empty() {
                return Err(ValidationError::QuestionWithoutOptions { id: question.id });
            }
            if !seen.insert(question.id) {
                return Err(ValidationError::DuplicateQuestionId { id: question.id });
            }
        }
    }

    if let Some(results) = &config.results_data {
        if let Some((index, tier)) = results
            .iter()
            .enumerate()
            .find(|(_, tier)| tier.min > tier.max)
        {
            return Err(ValidationError::InvertedTier {
                index,
                min: tier.min,
                max: tier.max,
            });
        }
    }

    Ok(())
}

/// Every answered position must exist and carry points one of its options offers.
pub fn check_answers(answers: &AnswerSet, catalog: &QuestionCatalog) -> Result<(), AssessmentError> {
    for (index, points) in answers.iter() {
        let question = catalog
            .get(index)
            .ok_or(AssessmentError::UnknownQuestion { index })?;
        if !question.accepts(points) {
            return Err(AssessmentError::InvalidPoints { index, points });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_partial_bodies_and_ignores_identifier() {
        let config = parse_update(json!({
            "id": "other",
            "primaryColor": "#000000",
            "title": null,
        }))
        .expect("valid body");

        assert_eq!(config.primary_color.as_deref(), Some("#000000"));
        assert!(config.title.is_none());
        assert!(config.questions_data.is_none());
    }

    #[test]
    fn rejects_mistyped_fields() {
        let error = parse_update(json!({ "primaryColor": 42 })).expect_err("wrong type");
        assert!(matches!(error, ValidationError::Schema(_)));

        let error = parse_update(json!({ "questionsData": "not a list" })).expect_err("wrong type");
        assert!(matches!(error, ValidationError::Schema(_)));

        let error = parse_update(json!(["primaryColor"])).expect_err("not an object");
        assert_eq!(error, ValidationError::NotAnObject);
    }

    #[test]
    fn rejects_negative_points_and_unknown_bullet_types() {
        let error = parse_update(json!({
            "questionsData": [{
                "id": 1, "category": "Plan", "text": "?",
                "options": [{ "text": "No", "points": -1 }]
            }]
        }))
        .expect_err("negative points");
        assert!(matches!(error, ValidationError::Schema(_)));

        let error = parse_update(json!({
            "resultsData": [{
                "min": 0, "max": 30, "title": "All", "description": "",
                "bullets": [{ "type": "threat", "text": "?" }]
            }]
        }))
        .expect_err("unknown bullet type");
        assert!(matches!(error, ValidationError::Schema(_)));
    }

    #[test]
    fn answer_bodies_must_carry_positions_and_points() {
        let answers = parse_answers(json!({ "answers": { "0": 3, "2": 1 } })).expect("valid body");
        assert_eq!(answers.get(2), Some(1));
        assert!(parse_answers(json!({})).expect("answers default").is_empty());

        for body in [
            json!({ "answers": { "0": -1 } }),
            json!({ "answers": { "first": 2 } }),
            json!({ "answers": [3, 2] }),
            json!("answers"),
        ] {
            let error = parse_answers(body).expect_err("malformed body");
            assert!(matches!(error, AssessmentError::Malformed(_)));
        }
    }

    #[test]
    fn rejects_structural_defects() {
        let error = parse_update(json!({
            "questionsData": [
                { "id": 1, "category": "Plan", "text": "?", "options": [{ "text": "Ja", "points": 1 }] },
                { "id": 1, "category": "Plan", "text": "?", "options": [{ "text": "Ja", "points": 1 }] }
            ]
        }))
        .expect_err("duplicate id");
        assert_eq!(error, ValidationError::DuplicateQuestionId { id: 1 });

        let error = parse_update(json!({
            "questionsData": [{ "id": 4, "category": "Plan", "text": "?", "options": [] }]
        }))
        .expect_err("no options");
        assert_eq!(error, ValidationError::QuestionWithoutOptions { id: 4 });

        let error = parse_update(json!({
            "resultsData": [{ "min": 9, "max": 3, "title": "Odd", "description": "" }]
        }))
        .expect_err("inverted");
        assert_eq!(
            error,
            ValidationError::InvertedTier {
                index: 0,
                min: 9,
                max: 3
            }
        );
    }
}
