use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tracing::error;

use super::repository::ConfigRepository;
use super::service::{QuizService, QuizServiceError};
use super::validation::{parse_answers, AssessmentError, ValidationError};

pub use super::validation::AssessmentRequest;

/// Router builder exposing the configuration and assessment endpoints.
pub fn quiz_router<R>(service: Arc<QuizService<R>>) -> Router
where
    R: ConfigRepository + 'static,
{
    Router::new()
        .route(
            "/api/config",
            get(config_handler::<R>).post(update_handler::<R>),
        )
        .route("/api/config/effective", get(effective_handler::<R>))
        .route("/api/assessment", post(assessment_handler::<R>))
        .with_state(service)
}

pub(crate) async fn config_handler<R>(State(service): State<Arc<QuizService<R>>>) -> Response
where
    R: ConfigRepository + 'static,
{
    match service.config() {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(other) => error_response(other),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    payload: Result<axum::Json<Value>, JsonRejection>,
) -> Response
where
    R: ConfigRepository + 'static,
{
    let payload = match payload {
        Ok(axum::Json(payload)) => payload,
        Err(rejection) => {
            return error_response(ValidationError::Schema(rejection.body_text()).into())
        }
    };

    match service.update(payload) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(other) => error_response(other),
    }
}

pub(crate) async fn effective_handler<R>(State(service): State<Arc<QuizService<R>>>) -> Response
where
    R: ConfigRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.effective())).into_response()
}

pub(crate) async fn assessment_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    payload: Result<axum::Json<Value>, JsonRejection>,
) -> Response
where
    R: ConfigRepository + 'static,
{
    let answers = match payload {
        Ok(axum::Json(payload)) => parse_answers(payload),
        Err(rejection) => Err(AssessmentError::Malformed(rejection.body_text())),
    };
    let answers = match answers {
        Ok(answers) => answers,
        Err(error) => return error_response(error.into()),
    };

    match service.assess(&answers) {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(other) => error_response(other),
    }
}

fn error_response(err: QuizServiceError) -> Response {
    let status = match &err {
        QuizServiceError::Validation(_) | QuizServiceError::Assessment(_) => {
            StatusCode::BAD_REQUEST
        }
        QuizServiceError::Repository(source) => {
            error!(error = %source, "configuration store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
