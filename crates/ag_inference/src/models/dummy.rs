use std::fmt;

use ag_core::{Error, Result};

/// Offline stand-in for a real model. Replies with a canned fenced JSON
/// article by default; tests can pin an arbitrary reply or force a hard
/// failure to exercise the propagation path.
#[derive(Default)]
pub struct DummyModel {
    response: Option<String>,
    fail_with: Option<String>,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            fail_with: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: None,
            fail_with: Some(message.into()),
        }
    }
}

const CANNED_RESPONSE: &str = r#"```json
{
    "title": "Dummy Article",
    "content": "A canned article used for offline runs.",
    "sections": [
        {
            "heading": "Overview",
            "content": "**Offline** mode produces this fixed section.\n* deterministic\n* no network",
            "links": []
        }
    ],
    "links": [],
    "sources": ["Local fixture"],
    "summary": "Canned output."
}
```"#;

#[async_trait::async_trait]
impl super::InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        if let Some(message) = &self.fail_with {
            return Err(Error::Inference(message.clone()));
        }
        Ok(self
            .response
            .clone()
            .unwrap_or_else(|| CANNED_RESPONSE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::InferenceModel;
    use super::*;
    use ag_core::Article;
    use crate::extract;

    #[tokio::test]
    async fn canned_response_parses_as_article() {
        let model = DummyModel::default();
        let raw = model.complete("anything").await.unwrap();
        let article: Article = extract::parse_or_else(&raw, Article::default);
        assert_eq!(article.title, "Dummy Article");
        assert_eq!(article.sections.len(), 1);
    }

    #[tokio::test]
    async fn failing_model_returns_error() {
        let model = DummyModel::failing("quota exceeded");
        let err = model.complete("anything").await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }
}
