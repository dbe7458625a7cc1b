pub mod document;
pub mod markdown;

pub use document::document;
pub use markdown::markdown_to_html;

pub mod prelude {
    pub use super::{document, markdown_to_html};
    pub use ag_core::{Article, SeoMetadata};
}
