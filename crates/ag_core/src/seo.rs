use serde::{Deserialize, Deserializer, Serialize};

/// SEO metadata for a generated article. All fields are optional on the
/// wire; the document assembler applies the fallback chain (article title,
/// fixed defaults) for anything left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_keywords")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub og_title: String,
    #[serde(default)]
    pub og_description: String,
    #[serde(default)]
    pub og_type: String,
    #[serde(default)]
    pub twitter_card: String,
    #[serde(default)]
    pub canonical_url: String,
    #[serde(default)]
    pub author: String,
}

// Models occasionally emit numbers or nested objects in the keywords
// array; keep the strings and drop the rest rather than failing the parse.
fn lenient_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_fields() {
        let seo: SeoMetadata = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert_eq!(seo.title, "T");
        assert!(seo.description.is_empty());
        assert!(seo.keywords.is_empty());
        assert!(seo.canonical_url.is_empty());
    }

    #[test]
    fn keywords_drop_non_string_entries() {
        let seo: SeoMetadata =
            serde_json::from_str(r#"{"keywords": ["rust", 42, {"k": "v"}, "web"]}"#).unwrap();
        assert_eq!(seo.keywords, vec!["rust", "web"]);
    }
}
