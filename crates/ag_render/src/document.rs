//! Assembly of a complete, self-contained HTML document from an article
//! and its SEO metadata. The emitted class names (`article-section`,
//! `section-content`, `section-links`, `article-links`, `article-sources`,
//! `sources-list`, `source-item`, `source-description`, `summary`) are
//! contract for consumers that style or scrape the output.
//!
//! Note: article data is interpolated without HTML escaping. That matches
//! the observable output this renderer is committed to; treat article data
//! as trusted or escape upstream.

use ag_core::{Article, SeoMetadata, Source};

use crate::markdown::markdown_to_html;

/// Render the full HTML document for an article.
pub fn document(article: &Article, seo: &SeoMetadata) -> String {
    let title = if article.title.is_empty() {
        "Article"
    } else {
        article.title.as_str()
    };

    let mut sections_html = String::new();
    for section in &article.sections {
        sections_html.push_str("<section class=\"article-section\">\n");
        if !section.heading.is_empty() {
            sections_html.push_str(&format!("  <h2>{}</h2>\n", section.heading));
        }
        if !section.content.is_empty() {
            sections_html.push_str(&format!(
                "  <div class=\"section-content\">{}</div>\n",
                markdown_to_html(&section.content)
            ));
        }
        sections_html.push_str(&links_block(
            &section.links,
            "section-links",
            "References:",
            "  ",
        ));
        sections_html.push_str("</section>\n");
    }

    let links_html = links_block(&article.links, "article-links", "Related Links:", "");
    let sources_html = sources_block(article);

    // SEO fields fall back to article data when the model left them empty.
    let meta_title = non_empty_or(&seo.title, title);
    let meta_description = seo.description.as_str();
    let keywords_tag = if seo.keywords.is_empty() {
        String::new()
    } else {
        format!(
            "<meta name=\"keywords\" content=\"{}\">",
            seo.keywords.join(", ")
        )
    };
    let og_title = non_empty_or(&seo.og_title, title);
    let og_description = non_empty_or(&seo.og_description, meta_description);
    let og_type = non_empty_or(&seo.og_type, "article");
    let twitter_card = non_empty_or(&seo.twitter_card, "summary_large_image");
    let canonical_tag = if seo.canonical_url.is_empty() {
        String::new()
    } else {
        format!("<link rel=\"canonical\" href=\"{}\">", seo.canonical_url)
    };

    let summary_block = match &article.summary {
        Some(summary) if !summary.is_empty() => {
            format!("<div class=\"summary\">{}</div>", markdown_to_html(summary))
        }
        _ => String::new(),
    };

    // Sections take over as the body when present; the intro content is
    // only rendered standalone for section-less articles.
    let content_block = if !article.content.is_empty() && article.sections.is_empty() {
        format!(
            "<div class=\"article-content\">{}</div>",
            markdown_to_html(&article.content)
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">

    <!-- SEO Meta Tags -->
    <title>{meta_title}</title>
    <meta name="description" content="{meta_description}">
    {keywords_tag}

    <!-- Open Graph Meta Tags -->
    <meta property="og:title" content="{og_title}">
    <meta property="og:description" content="{og_description}">
    <meta property="og:type" content="{og_type}">

    <!-- Twitter Card -->
    <meta name="twitter:card" content="{twitter_card}">
    <meta name="twitter:title" content="{og_title}">
    <meta name="twitter:description" content="{og_description}">

    {canonical_tag}

    <style>{stylesheet}</style>
</head>
<body>
    <div class="container">
        <article>
            <h1>{title}</h1>

            {summary_block}

            {content_block}

            {sections_html}

            {links_html}

            {sources_html}
        </article>
    </div>
</body>
</html>"#,
        stylesheet = STYLESHEET,
    )
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Qualify a link for use as an anchor target: already-absolute http(s)
/// URLs pass through untouched, anything else gets an `https://` prefix.
fn qualify(clean: &str) -> String {
    if clean.starts_with("http://") || clean.starts_with("https://") {
        clean.to_string()
    } else {
        format!("https://{}", clean)
    }
}

fn links_block(links: &[String], class: &str, label: &str, indent: &str) -> String {
    let valid: Vec<&str> = links
        .iter()
        .map(|link| link.trim())
        .filter(|link| !link.is_empty())
        .collect();
    if valid.is_empty() {
        return String::new();
    }

    let mut html = String::new();
    html.push_str(&format!("{indent}<div class=\"{class}\">\n"));
    html.push_str(&format!("{indent}  <h3>{label}</h3>\n"));
    html.push_str(&format!("{indent}  <ul>\n"));
    for link in valid {
        html.push_str(&format!(
            "{indent}    <li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>\n",
            qualify(link),
            link
        ));
    }
    html.push_str(&format!("{indent}  </ul>\n"));
    html.push_str(&format!("{indent}</div>\n"));
    html
}

fn sources_block(article: &Article) -> String {
    let sources: Vec<Source> = article
        .sources
        .iter()
        .filter_map(|entry| entry.normalize())
        .collect();
    if sources.is_empty() {
        return String::new();
    }

    let mut html = String::new();
    html.push_str("<div class=\"article-sources\">\n");
    html.push_str("  <h3>Sources:</h3>\n");
    html.push_str("  <ul class=\"sources-list\">\n");
    for source in &sources {
        html.push_str("    <li class=\"source-item\">\n");
        if !source.url.is_empty() {
            let label = non_empty_or(&source.title, &source.url);
            html.push_str(&format!(
                "      <strong><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></strong>\n",
                qualify(&source.url),
                label
            ));
        } else {
            html.push_str(&format!("      <strong>{}</strong>\n", source.title));
        }
        if !source.description.is_empty() {
            html.push_str(&format!(
                "      <p class=\"source-description\">{}</p>\n",
                source.description
            ));
        }
        html.push_str("    </li>\n");
    }
    html.push_str("  </ul>\n");
    html.push_str("</div>\n");
    html
}

const STYLESHEET: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            background-color: #f5f5f5;
            padding: 20px;
        }

        .container {
            max-width: 800px;
            margin: 0 auto;
            background-color: white;
            padding: 40px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }

        h1 {
            font-size: 2.5em;
            margin-bottom: 20px;
            color: #2c3e50;
            border-bottom: 3px solid #3498db;
            padding-bottom: 10px;
        }

        h2 {
            font-size: 1.8em;
            margin-top: 30px;
            margin-bottom: 15px;
            color: #34495e;
        }

        h3 {
            font-size: 1.3em;
            margin-top: 20px;
            margin-bottom: 10px;
            color: #555;
        }

        .article-section {
            margin-bottom: 30px;
        }

        .article-section p,
        .section-content p {
            margin-bottom: 15px;
            text-align: justify;
            font-size: 1.1em;
        }

        .section-content {
            margin-bottom: 15px;
        }

        .section-content ul {
            margin-left: 20px;
            margin-bottom: 15px;
            list-style-type: disc;
        }

        .section-content li {
            margin-bottom: 8px;
            line-height: 1.6;
        }

        .section-content strong {
            font-weight: 600;
            color: #2c3e50;
        }

        .section-content em {
            font-style: italic;
        }

        .article-links, .section-links {
            margin-top: 20px;
            padding: 15px;
            background-color: #f8f9fa;
            border-left: 4px solid #3498db;
            border-radius: 4px;
        }

        .article-links ul, .section-links ul {
            list-style-type: none;
            padding-left: 0;
        }

        .article-links li, .section-links li {
            margin-bottom: 8px;
        }

        .article-links a, .section-links a {
            color: #3498db;
            text-decoration: none;
            word-break: break-all;
        }

        .article-links a:hover, .section-links a:hover {
            text-decoration: underline;
        }

        .article-sources {
            margin-top: 30px;
            padding: 20px;
            background-color: #f8f9fa;
            border-left: 4px solid #27ae60;
            border-radius: 4px;
        }

        .article-sources h3 {
            color: #27ae60;
            margin-top: 0;
            margin-bottom: 15px;
        }

        .sources-list {
            list-style-type: none;
            padding-left: 0;
        }

        .source-item {
            margin-bottom: 15px;
            padding-bottom: 15px;
            border-bottom: 1px solid #ddd;
        }

        .source-item:last-child {
            border-bottom: none;
            margin-bottom: 0;
            padding-bottom: 0;
        }

        .source-item strong {
            display: block;
            margin-bottom: 5px;
            color: #2c3e50;
        }

        .source-item a {
            color: #27ae60;
            text-decoration: none;
        }

        .source-item a:hover {
            text-decoration: underline;
        }

        .source-description {
            margin: 5px 0 0 0;
            font-size: 0.9em;
            color: #666;
            font-style: italic;
        }

        .summary {
            font-style: italic;
            color: #666;
            margin-bottom: 30px;
            padding: 15px;
            background-color: #f8f9fa;
            border-left: 4px solid #95a5a6;
        }

        @media (max-width: 600px) {
            .container {
                padding: 20px;
            }

            h1 {
                font-size: 2em;
            }

            h2 {
                font-size: 1.5em;
            }
        }
"#;
