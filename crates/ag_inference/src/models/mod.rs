use std::fmt;
use std::sync::Arc;

use ag_core::Result;

use crate::Config;

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

/// The one external capability the pipeline consumes: a text-in,
/// text-out completion round-trip. Any error from an implementation
/// propagates unmodified as a pipeline failure.
#[async_trait::async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Construct a model from configuration. `dummy` is offline and meant for
/// tests and local development; everything else resolves to Gemini.
pub fn create_model(config: &Config) -> Result<Arc<dyn InferenceModel>> {
    match config.model_name.as_deref() {
        Some("dummy") => Ok(Arc::new(DummyModel::default())),
        _ => Ok(Arc::new(GeminiModel::new(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_selects_dummy_model() {
        let config = Config {
            model_name: Some("dummy".to_string()),
            ..Config::default()
        };
        let model = create_model(&config).unwrap();
        assert_eq!(model.name(), "Dummy");
    }

    #[test]
    fn factory_requires_api_key_for_gemini() {
        assert!(create_model(&Config::default()).is_err());
    }
}
