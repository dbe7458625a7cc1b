//! Prompt construction for the three model round-trips: article
//! generation, SEO metadata, and regeneration. Each prompt embeds the
//! JSON contract the extractor expects back.

use ag_core::{Article, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"\b(20[0-9][0-9])\b").unwrap();
}

const ARTICLE_FORMAT: &str = r#"
IMPORTANT INSTRUCTIONS:
- If a specific year is mentioned in the query, focus on events from that time period
- If no year is specified, prioritize the most recent information available, but if only historical information exists, use that
- Use factual information from your knowledge base
- Ensure accuracy and clarity in all dates and events mentioned

Requirements:
1. Create a clear, engaging title
2. Write informative content in 3-5 logical sections
3. Use factual information from your knowledge base, prioritizing the most recent
4. Format with headings and paragraphs
5. Use markdown formatting: **bold** for key terms, names, and important concepts
6. For lists, use proper markdown format with each item on a new line starting with *
7. Ensure all dates and events are accurate and correspond to the time period mentioned

Return the article in this JSON format:
{
    "title": "Article Title",
    "content": "Brief introduction paragraph",
    "sections": [
        {
            "heading": "Section Heading",
            "content": "Section content with **bold** for important terms. For lists, format like this:\n* First bullet point\n* Second bullet point\n* Third bullet point",
            "links": []
        }
    ],
    "links": [],
    "sources": [
        {
            "title": "Source Title or Publication Name",
            "url": "https://example.com/article",
            "description": "Brief description of what information was gathered from this source"
        }
    ],
    "summary": "Brief summary"
}

IMPORTANT: Include actual sources in the "sources" array. These should be real sources from your knowledge base that you used to gather information for this article. Include:
- News articles, publications, or websites
- Official statements or documents
- Research papers or reports
- Any credible sources that informed your article content
- If you don't have specific URLs, provide the publication name and description"#;

/// Prompt for generating a fresh article about `query`.
///
/// Queries naming a `20xx` year get an explicit instruction to stay in
/// that time period; an optional URL is appended as extra context.
pub fn article(query: &str, url: Option<&str>) -> String {
    let year_context = YEAR_RE
        .captures(query)
        .map(|caps| format!("\n\nFocus on events and information from {}.", &caps[1]))
        .unwrap_or_default();

    let mut prompt = format!(
        "Write a comprehensive, well-structured article about: {query}\n{year_context}\n{ARTICLE_FORMAT}"
    );
    if let Some(url) = url {
        prompt.push_str(&format!("\n\nUse this URL as additional context: {url}"));
    }
    prompt
}

/// Prompt for the SEO round-trip, fed the article that was just produced.
/// Only the title and the first 1000 characters of content go in.
pub fn seo(article: &Article) -> String {
    let content: String = article.content.chars().take(1000).collect();
    format!(
        r#"Based on this article, generate comprehensive SEO metadata:

Title: {title}
Content: {content}...

Generate SEO metadata in the following JSON format:
{{
    "title": "SEO optimized title (max 60 characters)",
    "description": "Meta description (max 160 characters)",
    "keywords": ["keyword1", "keyword2", "keyword3"],
    "og_title": "Open Graph title",
    "og_description": "Open Graph description",
    "og_type": "article",
    "twitter_card": "summary_large_image",
    "canonical_url": "",
    "author": ""
}}"#,
        title = article.title,
    )
}

/// Prompt asking the model to edit an existing article in place, keeping
/// the same JSON shape.
pub fn regenerate(article: &Article, instruction: &str) -> Result<String> {
    let existing = serde_json::to_string_pretty(article)?;
    Ok(format!(
        "Modify this existing article based on the following instruction:\n\n\
         Instruction: {instruction}\n\n\
         Existing Article:\n{existing}\n\n\
         Please modify the article according to the instruction while maintaining \
         its core information and structure. Return the updated article in the same \
         JSON format as the original."
    ))
}
