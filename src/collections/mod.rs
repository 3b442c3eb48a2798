pub mod document;
pub mod tags;
pub mod types;

pub use document::{
    document_id, parse_document, Article, ArticleSummary, ContentStore, Document, Documents,
    DOCUMENT_EXTENSIONS,
};
pub use tags::TagIndex;
pub use types::{sort_articles, sort_by_date, SortKey};
