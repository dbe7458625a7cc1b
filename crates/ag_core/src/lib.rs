pub mod article;
pub mod error;
pub mod seo;

pub use article::{Article, Section, Source, SourceEntry};
pub use error::Error;
pub use seo::SeoMetadata;

pub type Result<T> = std::result::Result<T, Error>;
