use crate::assets::SpaAssets;
use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryConfigRepository};
use crate::routes::with_quiz_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use maturity_check::config::AppConfig;
use maturity_check::error::AppError;
use maturity_check::quiz::{ConfigRepository, JsonFileConfigRepository, QuizService};
use maturity_check::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(store) = args.store.take() {
        config.storage.store_path = Some(store);
    }
    if let Some(public_dir) = args.public_dir.take() {
        config.assets.public_dir = public_dir;
    }

    telemetry::init(&config.telemetry)?;

    match config.storage.store_path.clone() {
        Some(path) => {
            let repository = JsonFileConfigRepository::open(&path)?;
            info!(path = %path.display(), "persisting quiz configuration to file");
            serve(config, repository).await
        }
        None => {
            info!("quiz configuration kept in memory; edits are lost on restart");
            serve(config, InMemoryConfigRepository::default()).await
        }
    }
}

async fn serve<R>(config: AppConfig, repository: R) -> Result<(), AppError>
where
    R: ConfigRepository + 'static,
{
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(QuizService::new(Arc::new(repository)));
    let assets = SpaAssets::new(config.assets.public_dir.clone());

    let app = with_quiz_routes(service, assets)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        public_dir = %config.assets.public_dir.display(),
        "maturity check service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
