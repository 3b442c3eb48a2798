pub mod yaml_parser;

use thiserror::Error;

use crate::front_matter::types::FrontMatter;
use yaml_parser::{split_sections, SplitError};

/// Why a document's front matter could not be read
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document does not start with a '---' front matter block")]
    Missing,
    #[error("front matter is missing its closing '---' delimiter")]
    Unterminated,
    #[error("front matter must be a YAML mapping")]
    NotMapping,
    #[error("invalid front matter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<SplitError> for ParseError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::Missing => ParseError::Missing,
            SplitError::Unterminated => ParseError::Unterminated,
        }
    }
}

/// A document split into parsed front matter and its raw body
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument<'a> {
    pub front_matter: FrontMatter,
    pub body: &'a str,
}

/// Parse front matter from text
pub fn parse(content: &str) -> Result<ParsedDocument<'_>, ParseError> {
    let sections = split_sections(content)?;
    let front_matter = parse_front_matter(sections.yaml)?;

    Ok(ParsedDocument {
        front_matter,
        body: sections.body,
    })
}

/// Parse the YAML between the delimiters
pub fn parse_front_matter(yaml: &str) -> Result<FrontMatter, ParseError> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    match value {
        // An empty block is a document with no metadata at all
        serde_yaml::Value::Null => Ok(FrontMatter::default()),
        serde_yaml::Value::Mapping(_) => Ok(serde_yaml::from_value(value)?),
        _ => Err(ParseError::NotMapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter() {
        let content = "---\ntitle: Test Page\nauthor: Sam\n---\n\nPage content here";
        let parsed = parse(content).unwrap();

        assert_eq!(parsed.front_matter.title, Some("Test Page".to_string()));
        assert_eq!(parsed.front_matter.author, Some("Sam".to_string()));
        assert_eq!(parsed.front_matter.image, None);
        assert_eq!(parsed.body, "\nPage content here");
    }

    #[test]
    fn test_numeric_key_is_not_a_fault() {
        let parsed = parse("---\ntitle: T\n2023: recap\n---\nbody").unwrap();
        assert_eq!(parsed.front_matter.title.as_deref(), Some("T"));
        assert_eq!(parsed.front_matter.extra.len(), 1);
    }

    #[test]
    fn test_empty_block() {
        let parsed = parse("---\n---\nbody").unwrap();
        assert_eq!(parsed.front_matter, FrontMatter::default());
        assert_eq!(parsed.body, "body");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse("no header"), Err(ParseError::Missing)));
        assert!(matches!(parse("---\ntitle: T\n"), Err(ParseError::Unterminated)));
        assert!(matches!(parse("---\n- a\n- b\n---\n"), Err(ParseError::NotMapping)));
        assert!(matches!(parse("---\ntitle: [unclosed\n---\n"), Err(ParseError::Yaml(_))));
    }
}
