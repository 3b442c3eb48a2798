use once_cell::sync::Lazy;
use regex::Regex;

/// A `---` line, optionally followed by trailing blanks
static DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^---[ \t]*\r?\n?$").unwrap());

/// Raw pieces of a document with front matter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSections<'a> {
    /// YAML between the delimiters
    pub yaml: &'a str,
    /// Everything after the closing delimiter line, untouched
    pub body: &'a str,
}

/// Why a document could not be split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The first line is not a `---` delimiter
    Missing,
    /// No closing `---` line
    Unterminated,
}

/// Split a document into its front matter and body.
///
/// The opening delimiter must be the first line (a UTF-8 BOM is ignored).
pub fn split_sections(content: &str) -> Result<RawSections<'_>, SplitError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content.split_inclusive('\n');
    let first = lines.next().ok_or(SplitError::Missing)?;
    if !DELIMITER.is_match(first) {
        return Err(SplitError::Missing);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if DELIMITER.is_match(line) {
            return Ok(RawSections {
                yaml: &content[yaml_start..offset],
                body: &content[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    Err(SplitError::Unterminated)
}

/// Check if content starts with a front matter delimiter
pub fn has_front_matter(content: &str) -> bool {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content
        .split_inclusive('\n')
        .next()
        .map_or(false, |line| DELIMITER.is_match(line))
}
