pub mod analysis;
pub mod engine;
pub mod types;

pub use analysis::{analyze, reading_minutes};
pub use types::{BodyStats, Heading, WORDS_PER_MINUTE};
