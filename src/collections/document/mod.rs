pub mod model;
pub mod loader;

pub use model::{document_id, Article, ArticleSummary, Document};
pub use loader::{parse_document, ContentStore, Documents, DOCUMENT_EXTENSIONS};
