use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use ag_core::Result;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/articles/generate", post(handlers::generate_article))
        .route(
            "/api/articles/regenerate",
            post(handlers::regenerate_article),
        )
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

// Origins that fail header-value parsing are dropped; an empty list falls
// back to a permissive layer so local development keeps working.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if parsed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Parse a comma-separated origin list: split, trim, drop empties.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.to_string())
        .collect()
}

pub mod prelude {
    pub use crate::AppState;
    pub use ag_core::{Article, Error, Result, SeoMetadata};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:3000, http://localhost:3001 ,,");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "http://localhost:3001"]
        );
    }

    #[test]
    fn parse_origins_of_empty_string_is_empty() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }
}
