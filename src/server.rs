use crate::utils::error::Result;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PAGE: &str = "index.html";

/// Port for the companion server: `PORT` environment variable, else 5000.
pub fn port_from_env() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn router(page: PathBuf) -> Router {
    let page = Arc::new(page);
    Router::new().route("/", get(move || serve_page(page.clone())))
}

async fn serve_page(page: Arc<PathBuf>) -> std::result::Result<Html<String>, (StatusCode, String)> {
    // Read per request so edits to the page show up without a restart.
    match tokio::fs::read_to_string(page.as_ref()).await {
        Ok(contents) => {
            tracing::debug!("Served {} ({} bytes)", page.display(), contents.len());
            Ok(Html(contents))
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", page.display(), e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{} could not be read", page.display()),
            ))
        }
    }
}

pub async fn serve(page: PathBuf, port: u16) -> Result<()> {
    let app = router(page);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_serve_page_returns_file_contents() {
        let mut page = tempfile::NamedTempFile::new().unwrap();
        write!(page, "<html><body><h1>Hello</h1></body></html>").unwrap();

        let response = serve_page(Arc::new(page.path().to_path_buf())).await.unwrap();
        assert!(response.0.contains("<h1>Hello</h1>"));
    }

    #[tokio::test]
    async fn test_serve_page_reports_missing_file() {
        let err = serve_page(Arc::new(PathBuf::from("no-such-page.html")))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_port_from_env() {
        std::env::remove_var("PORT");
        assert_eq!(port_from_env(), DEFAULT_PORT);

        std::env::set_var("PORT", "8080");
        assert_eq!(port_from_env(), 8080);

        std::env::set_var("PORT", "not-a-port");
        assert_eq!(port_from_env(), DEFAULT_PORT);

        std::env::remove_var("PORT");
    }
}
