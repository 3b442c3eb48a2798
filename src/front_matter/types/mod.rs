pub mod article;
pub mod deserializers;
pub mod front_matter;

pub use article::{timestamp, ArticleMeta, MetaDefect, REQUIRED_KEYS};
pub use front_matter::FrontMatter;
