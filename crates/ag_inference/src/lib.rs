pub mod extract;
pub mod models;
pub mod pipeline;
pub mod prompts;

pub use models::{create_model, InferenceModel};
pub use pipeline::{ArticlePipeline, GeneratedArticle};

/// Explicit configuration for model construction. Built once by the
/// binary and passed in; nothing in this crate reads the environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
}

pub mod prelude {
    pub use super::models::{create_model, InferenceModel};
    pub use super::pipeline::{ArticlePipeline, GeneratedArticle};
    pub use super::Config;
    pub use ag_core::{Article, Error, Result, SeoMetadata};
}
