use std::process::ExitCode;

use crate::cli::commands::load_articles;
use crate::cli::Context;
use crate::collections::{sort_articles, Article, SortKey};
use crate::front_matter::timestamp;
use crate::utils::error::{FolioError, Result};

/// Handle the 'list' command
pub fn handle_list_command(
    ctx: &Context,
    sort: SortKey,
    tag: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let articles = select_articles(load_articles(ctx), tag, sort);

    if json {
        let summaries: Vec<_> = articles.iter().map(Article::summary).collect();
        let out = serde_json::to_string_pretty(&summaries)
            .map_err(|e| FolioError::Generic(format!("Failed to serialize listing: {}", e)))?;
        println!("{}", out);
    } else {
        for article in &articles {
            println!("{}", format_line(article));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Keep articles carrying `tag` (all of them without one), in `sort` order
fn select_articles(articles: Vec<Article>, tag: Option<&str>, sort: SortKey) -> Vec<Article> {
    let mut selected: Vec<Article> = articles
        .into_iter()
        .filter(|article| tag.map_or(true, |t| article.meta.has_tag(t)))
        .collect();
    sort_articles(&mut selected, sort);
    selected
}

fn format_line(article: &Article) -> String {
    format!(
        "{}  {:<32}  {}",
        timestamp::format(&article.meta.pub_date),
        article.slug(),
        article.meta.title
    )
}
