use std::fmt::Write as _;
use std::process::ExitCode;

use crate::cli::commands::load_articles;
use crate::cli::Context;
use crate::collections::Article;
use crate::front_matter::to_front_matter_block;
use crate::markdown::analyze;
use crate::utils::error::{FolioError, Result};

/// Handle the 'show' command
pub fn handle_show_command(ctx: &Context, slug: &str) -> Result<ExitCode> {
    let article = find_article(load_articles(ctx), slug)?;
    print!("{}", render_article(&article)?);
    Ok(ExitCode::SUCCESS)
}

fn find_article(articles: Vec<Article>, slug: &str) -> Result<Article> {
    articles
        .into_iter()
        .find(|article| article.slug() == slug)
        .ok_or_else(|| FolioError::Content(format!("No valid article with slug '{}'", slug)))
}

/// Metadata block, `#` statistics lines, a blank line, then the raw body
fn render_article(article: &Article) -> Result<String> {
    let stats = analyze(article.body());

    let mut out = to_front_matter_block(&article.meta)?;
    // Writing to a String cannot fail
    let _ = writeln!(out, "# file: {}", article.document.relative_path.display());
    let _ = writeln!(out, "# {} words, {} min read", stats.words, stats.reading_minutes);
    if !stats.code_languages.is_empty() {
        let _ = writeln!(out, "# code: {}", stats.code_languages.join(", "));
    }
    for heading in &stats.headings {
        let indent = "  ".repeat(heading.level.saturating_sub(1) as usize);
        let _ = writeln!(out, "# outline: {}{}", indent, heading.text);
    }
    out.push('\n');
    out.push_str(article.body());

    Ok(out)
}
