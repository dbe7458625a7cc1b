//! Generation orchestrator: prompt -> model -> extraction -> SEO
//! round-trip -> document assembly. The three call sites each own their
//! parse-failure fallback; model-call errors propagate untouched.

use std::sync::Arc;

use ag_core::{Article, Result, SeoMetadata};
use serde::Serialize;
use tracing::info;

use crate::models::InferenceModel;
use crate::{extract, prompts};

const UNPARSED_ARTICLE_NOTE: &str = "Article generated but could not parse structured format";
const REGENERATION_NOTE: &str = "Regeneration attempted but could not parse response";

/// Everything a single request produces: the structured article, its SEO
/// metadata, and the rendered document.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArticle {
    pub article: Article,
    pub seo: SeoMetadata,
    pub html: String,
}

#[derive(Clone)]
pub struct ArticlePipeline {
    model: Arc<dyn InferenceModel>,
}

impl ArticlePipeline {
    pub fn new(model: Arc<dyn InferenceModel>) -> Self {
        Self { model }
    }

    /// Generate an article for `query`, with an optional context URL.
    ///
    /// Malformed model output degrades into a section-less article
    /// carrying the raw completion as content; it is never an error.
    pub async fn generate(&self, query: &str, url: Option<&str>) -> Result<GeneratedArticle> {
        info!("📝 Generating article for query: {}", query);
        let prompt = prompts::article(query, url);
        let raw = self.model.complete(&prompt).await?;
        let article = extract::parse_or_else(&raw, || fallback_article(query, &raw));

        let seo = self.seo_for(&article).await?;
        let html = ag_render::document(&article, &seo);
        Ok(GeneratedArticle { article, seo, html })
    }

    /// Apply a free-text edit instruction to an existing article.
    ///
    /// If the model's edit cannot be parsed, the original article comes
    /// back unchanged except for `regeneration_note`, which callers must
    /// treat as a "no edit happened" signal.
    pub async fn regenerate(
        &self,
        article: Article,
        instruction: &str,
    ) -> Result<GeneratedArticle> {
        info!("📝 Regenerating article: {}", article.title);
        let prompt = prompts::regenerate(&article, instruction)?;
        let raw = self.model.complete(&prompt).await?;
        let updated = extract::parse_or_else(&raw, || annotate_unchanged(&article));

        let seo = self.seo_for(&updated).await?;
        let html = ag_render::document(&updated, &seo);
        Ok(GeneratedArticle {
            article: updated,
            seo,
            html,
        })
    }

    // Second round-trip, defined in terms of the article just produced;
    // its fallback needs no model output at all.
    async fn seo_for(&self, article: &Article) -> Result<SeoMetadata> {
        let prompt = prompts::seo(article);
        let raw = self.model.complete(&prompt).await?;
        Ok(extract::parse_or_else(&raw, || fallback_seo(article)))
    }
}

/// Article-generation fallback: keep the raw completion visible as
/// content under the original query as title.
fn fallback_article(query: &str, raw: &str) -> Article {
    Article {
        title: query.to_string(),
        content: raw.to_string(),
        summary: Some(UNPARSED_ARTICLE_NOTE.to_string()),
        ..Article::default()
    }
}

/// SEO fallback: derive metadata purely from the article, truncated to
/// the usual meta-tag limits (counting chars, not bytes).
fn fallback_seo(article: &Article) -> SeoMetadata {
    let title = if article.title.is_empty() {
        "Article".to_string()
    } else {
        article.title.clone()
    };
    let summary = article
        .summary
        .clone()
        .unwrap_or_else(|| truncate_chars(&article.content, 150));

    SeoMetadata {
        title: truncate_chars(&title, 60),
        description: truncate_chars(&summary, 160),
        keywords: vec![],
        og_title: title,
        og_description: truncate_chars(&summary, 200),
        og_type: "article".to_string(),
        twitter_card: "summary_large_image".to_string(),
        canonical_url: String::new(),
        author: String::new(),
    }
}

/// Regeneration fallback: the input article, untouched except for the
/// failure marker.
fn annotate_unchanged(article: &Article) -> Article {
    let mut unchanged = article.clone();
    unchanged.regeneration_note = Some(REGENERATION_NOTE.to_string());
    unchanged
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
