use axum::extract::Extension;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error};

/// Serves the built single-page application, falling back to its shell document.
#[derive(Debug, Clone)]
pub(crate) struct SpaAssets {
    public_dir: PathBuf,
}

impl SpaAssets {
    pub(crate) fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    fn index_path(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }

    /// Maps a request path onto the public directory. Anything but plain file components
    /// (`..`, roots, prefixes) is refused.
    fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = request_path.trim_start_matches('/');
        if relative.is_empty() {
            return Some(self.index_path());
        }
        if relative.contains('\\') {
            return None;
        }

        let relative = Path::new(relative);
        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return None;
        }
        Some(self.public_dir.join(relative))
    }

    pub(crate) async fn respond(&self, request_path: &str) -> Response {
        if let Some(path) = self.resolve(request_path) {
            if is_file(&path).await {
                match tokio::fs::read(&path).await {
                    Ok(bytes) => {
                        let content_type = content_type_for(&path).to_string();
                        return (
                            StatusCode::OK,
                            [(header::CONTENT_TYPE, content_type)],
                            bytes,
                        )
                            .into_response();
                    }
                    Err(err) => debug!(path = %path.display(), %err, "asset unreadable"),
                }
            }
        }

        self.shell().await
    }

    async fn shell(&self) -> Response {
        let index = self.index_path();
        match tokio::fs::read_to_string(&index).await {
            Ok(html) => (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref()),
                    (header::X_FRAME_OPTIONS, "ALLOWALL"),
                ],
                html,
            )
                .into_response(),
            Err(err) => {
                error!(path = %index.display(), %err, "application shell missing");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
            }
        }
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

pub(crate) fn content_type_for(path: &Path) -> mime::Mime {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html") => mime::TEXT_HTML,
        Some("js") => mime::APPLICATION_JAVASCRIPT,
        Some("css") => mime::TEXT_CSS,
        Some("json") => mime::APPLICATION_JSON,
        Some("png") => mime::IMAGE_PNG,
        Some("svg") => mime::IMAGE_SVG,
        _ => mime_guess::from_path(path).first_or_octet_stream(),
    }
}

pub(crate) async fn spa_fallback(Extension(assets): Extension<SpaAssets>, uri: Uri) -> Response {
    assets.respond(uri.path()).await
}
