use std::fmt;
use std::sync::Arc;

use ag_core::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::Config;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiModel {
    client: Arc<Client>,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("GEMINI_API_KEY is not set".to_string()))?;

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            model: config
                .model_name
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait::async_trait]
impl super::InferenceModel for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| Error::Inference("Gemini response contained no candidates".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_missing_api_key() {
        assert!(GeminiModel::new(&Config::default()).is_err());
        let config = Config {
            api_key: Some(String::new()),
            ..Config::default()
        };
        assert!(GeminiModel::new(&config).is_err());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = Config {
            api_key: Some("secret-key".to_string()),
            ..Config::default()
        };
        let model = GeminiModel::new(&config).unwrap();
        let debug = format!("{:?}", model);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn defaults_apply_when_config_is_sparse() {
        let config = Config {
            api_key: Some("k".to_string()),
            ..Config::default()
        };
        let model = GeminiModel::new(&config).unwrap();
        assert_eq!(model.model, DEFAULT_MODEL);
        assert_eq!(model.base_url, DEFAULT_BASE_URL);
    }
}
