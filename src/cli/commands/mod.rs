mod check;
mod config;
mod list;
mod new;
mod show;
mod tags;

pub use check::handle_check_command;
pub use config::handle_config_command;
pub use list::handle_list_command;
pub use new::handle_new_command;
pub use show::handle_show_command;
pub use tags::handle_tags_command;

use log::warn;

use crate::cli::Context;
use crate::collections::{Article, ContentStore};

/// Every article that parses and validates; the rest are skipped with a warning.
///
/// `check` is the command that explains why a document was skipped.
pub(crate) fn load_articles(ctx: &Context) -> Vec<Article> {
    let store = ContentStore::new(&ctx.paths.content_dir);
    let mut articles = Vec::new();

    for result in store.parse_all() {
        match result {
            Ok(doc) => match doc.into_article() {
                Ok(article) => articles.push(article),
                Err((doc, defects)) => warn!(
                    "Skipping {}: {} defect(s), run `folio check` for details",
                    doc.relative_path.display(),
                    defects.len()
                ),
            },
            Err(e) => warn!("Skipping unreadable document: {}", e),
        }
    }

    articles
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_articles_skips_invalid() {
        let (_dir, ctx) = test_site::sample();
        let mut slugs: Vec<String> = load_articles(&ctx).iter().map(|a| a.slug().to_string()).collect();
        slugs.sort();
        assert_eq!(slugs, vec!["dart-streams", "flutter-intro", "rust-errors"]);
    }
}
