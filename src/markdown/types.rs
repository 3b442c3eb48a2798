use serde::Serialize;

/// Reading speed used for reading time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// A heading found in a body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Statistics about an article body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyStats {
    /// Prose words; fenced code is not counted
    pub words: usize,
    pub reading_minutes: usize,
    pub headings: Vec<Heading>,
    /// Fence languages in order of first appearance
    pub code_languages: Vec<String>,
}
