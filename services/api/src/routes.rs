use crate::assets::{spa_fallback, SpaAssets};
use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use maturity_check::quiz::{quiz_router, ConfigRepository, QuizService};
use serde_json::json;
use std::sync::Arc;

/// Quiz API plus operational probes. Every other path is handed to the single-page app.
pub(crate) fn with_quiz_routes<R>(service: Arc<QuizService<R>>, assets: SpaAssets) -> axum::Router
where
    R: ConfigRepository + 'static,
{
    quiz_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .fallback(spa_fallback)
        .layer(Extension(assets))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    if ready {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryConfigRepository;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct Harness {
        router: axum::Router,
        readiness: Arc<AtomicBool>,
        _public: TempDir,
    }

    fn harness() -> Harness {
        let public = TempDir::new().expect("temp dir");
        std::fs::write(public.path().join("index.html"), "<html>shell</html>")
            .expect("write index");

        let readiness = Arc::new(AtomicBool::new(false));
        let state = AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let service = Arc::new(QuizService::new(Arc::new(
            InMemoryConfigRepository::default(),
        )));
        let router = with_quiz_routes(service, SpaAssets::new(public.path()))
            .layer(Extension(state));

        Harness {
            router,
            readiness,
            _public: public,
        }
    }

    async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router
            .clone()
            .oneshot(request)
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        (status, bytes.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request builds")
    }

    #[tokio::test]
    async fn readiness_tracks_the_flag() {
        let harness = harness();

        let (status, _) = send(&harness.router, get("/ready")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        harness
            .readiness
            .store(true, std::sync::atomic::Ordering::Release);
        let (status, body) = send(&harness.router, get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn health_and_metrics_respond() {
        let harness = harness();

        let (status, body) = send(&harness.router, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(body["status"], "ok");

        let (status, _) = send(&harness.router, get("/metrics")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn api_routes_win_over_the_fallback() {
        let harness = harness();

        let (status, body) = send(&harness.router, get("/api/config/effective")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(body["buttonText"], "Start testen nu");
        assert_eq!(body["questionsData"].as_array().map(Vec::len), Some(10));
    }

    #[tokio::test]
    async fn client_side_routes_receive_the_shell() {
        let harness = harness();

        let (status, body) = send(&harness.router, get("/admin")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>shell</html>");
    }
}
