use ag_inference::ArticlePipeline;

pub struct AppState {
    pub pipeline: ArticlePipeline,
    pub cors_origins: Vec<String>,
}
