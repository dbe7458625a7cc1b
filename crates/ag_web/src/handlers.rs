use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use ag_core::{Article, SeoMetadata};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub query: String,
    #[serde(default)]
    pub url: Option<Url>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub article_json: Article,
    pub seo_metadata_json: SeoMetadata,
    pub html_content: String,
}

#[derive(Debug, Deserialize)]
pub struct RegenerateRequest {
    pub article_json: Article,
    pub prompt: String,
}

type HandlerResult = Result<Json<GenerateResponse>, (StatusCode, String)>;

pub async fn generate_article(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> HandlerResult {
    let url = request.url.as_ref().map(Url::as_str);
    match state.pipeline.generate(&request.query, url).await {
        Ok(generated) => Ok(Json(GenerateResponse {
            article_json: generated.article,
            seo_metadata_json: generated.seo,
            html_content: generated.html,
        })),
        Err(err) => {
            tracing::error!("article generation failed: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error generating article: {}", err),
            ))
        }
    }
}

pub async fn regenerate_article(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegenerateRequest>,
) -> HandlerResult {
    match state
        .pipeline
        .regenerate(request.article_json, &request.prompt)
        .await
    {
        Ok(generated) => Ok(Json(GenerateResponse {
            article_json: generated.article,
            seo_metadata_json: generated.seo,
            html_content: generated.html,
        })),
        Err(err) => {
            tracing::error!("article regeneration failed: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error regenerating article: {}", err),
            ))
        }
    }
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Article Generator API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_inference::models::DummyModel;
    use ag_inference::ArticlePipeline;

    fn state_with(model: DummyModel) -> State<Arc<AppState>> {
        State(Arc::new(AppState {
            pipeline: ArticlePipeline::new(Arc::new(model)),
            cors_origins: vec![],
        }))
    }

    #[tokio::test]
    async fn generate_returns_article_seo_and_html() {
        let request = GenerateRequest {
            query: "cats".to_string(),
            url: None,
        };
        let Json(response) = generate_article(state_with(DummyModel::default()), Json(request))
            .await
            .unwrap();

        assert_eq!(response.article_json.title, "Dummy Article");
        assert!(response.html_content.starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn model_failure_maps_to_500() {
        let request = GenerateRequest {
            query: "cats".to_string(),
            url: None,
        };
        let (status, message) = generate_article(
            state_with(DummyModel::failing("quota exceeded")),
            Json(request),
        )
        .await
        .unwrap_err();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn regenerate_surfaces_note_on_unparseable_edit() {
        let request = RegenerateRequest {
            article_json: Article {
                title: "X".to_string(),
                ..Article::default()
            },
            prompt: "edit".to_string(),
        };
        let Json(response) = regenerate_article(
            state_with(DummyModel::with_response("not json")),
            Json(request),
        )
        .await
        .unwrap();

        assert_eq!(response.article_json.title, "X");
        assert!(response.article_json.regeneration_note.is_some());
    }

    #[test]
    fn generate_request_accepts_optional_url() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"query": "q", "url": "https://example.com/x"}"#).unwrap();
        assert_eq!(request.url.unwrap().as_str(), "https://example.com/x");

        let request: GenerateRequest = serde_json::from_str(r#"{"query": "q"}"#).unwrap();
        assert!(request.url.is_none());

        assert!(serde_json::from_str::<GenerateRequest>(r#"{"query": "q", "url": "not a url"}"#)
            .is_err());
    }
}
