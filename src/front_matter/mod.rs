pub mod types;
pub mod parser;
pub mod serializer;

// Re-export the most common items for convenience
pub use types::{timestamp, ArticleMeta, FrontMatter, MetaDefect, REQUIRED_KEYS};
pub use parser::{parse, parse_front_matter, ParseError, ParsedDocument};
pub use parser::yaml_parser::has_front_matter;
pub use serializer::{render_document, to_front_matter_block};
