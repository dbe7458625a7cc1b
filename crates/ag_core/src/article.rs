use serde::{Deserialize, Serialize};

/// Structured article produced by generation or regeneration.
///
/// Every field is lenient on the wire: the model is asked for this shape
/// but not trusted to produce it, so missing fields deserialize to their
/// defaults instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Set only when a regeneration round-trip could not be parsed and the
    /// original article was returned unchanged. Callers must treat this as
    /// an explicit "no edit happened" signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regeneration_note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub links: Vec<String>,
}

/// A source as the model reports it: either a bare string or a structured
/// record. Models alternate between the two freely, so both are accepted
/// and normalized once via [`SourceEntry::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceEntry {
    Text(String),
    Record {
        #[serde(default)]
        title: String,
        /// Some completions use "name" instead of "title".
        #[serde(default, skip_serializing_if = "String::is_empty")]
        name: String,
        #[serde(default)]
        url: String,
        #[serde(default)]
        description: String,
    },
}

/// Canonical source shape used by everything downstream of normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl SourceEntry {
    /// Collapse the union into the canonical record. Entries with neither
    /// a title nor a url carry no renderable information and are dropped.
    pub fn normalize(&self) -> Option<Source> {
        let source = match self {
            SourceEntry::Text(title) => Source {
                title: title.trim().to_string(),
                url: String::new(),
                description: String::new(),
            },
            SourceEntry::Record {
                title,
                name,
                url,
                description,
            } => {
                let title = if title.is_empty() { name } else { title };
                Source {
                    title: title.trim().to_string(),
                    url: url.trim().to_string(),
                    description: description.trim().to_string(),
                }
            }
        };

        if source.title.is_empty() && source.url.is_empty() {
            None
        } else {
            Some(source)
        }
    }
}
