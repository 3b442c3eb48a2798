use std::collections::BTreeSet;
use std::process::ExitCode;

use crate::cli::commands::load_articles;
use crate::cli::Context;
use crate::collections::TagIndex;
use crate::utils::error::{FolioError, Result};

/// Handle the 'tags' command
pub fn handle_tags_command(ctx: &Context, json: bool) -> Result<ExitCode> {
    let articles = load_articles(ctx);
    let index = TagIndex::build(&articles);

    if json {
        let out = serde_json::to_string_pretty(&index)
            .map_err(|e| FolioError::Generic(format!("Failed to serialize tag index: {}", e)))?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    for (tag, slugs) in index.iter() {
        println!("{}", format_tag_line(tag, slugs));
    }

    Ok(ExitCode::SUCCESS)
}

/// `tag (count): slug, slug`
fn format_tag_line(tag: &str, slugs: &BTreeSet<String>) -> String {
    let slugs: Vec<&str> = slugs.iter().map(String::as_str).collect();
    format!("{} ({}): {}", tag, slugs.len(), slugs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_site;

    #[test]
    fn test_tag_lines() {
        let (_dir, ctx) = test_site::sample();
        let index = TagIndex::build(&load_articles(&ctx));
        let lines: Vec<String> = index
            .iter()
            .map(|(tag, slugs)| format_tag_line(tag, slugs))
            .collect();

        assert_eq!(
            lines,
            vec![
                "dart (2): dart-streams, flutter-intro",
                "flutter (1): flutter-intro",
                "rust (1): rust-errors",
            ]
        );
    }

    #[test]
    fn test_empty_site_has_no_tags() {
        let (_dir, ctx) = test_site::site(&[]);
        assert!(TagIndex::build(&load_articles(&ctx)).is_empty());
        assert!(handle_tags_command(&ctx, false).is_ok());
    }
}
