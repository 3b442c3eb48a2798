use std::cmp::Reverse;

use crate::collections::document::Article;

/// Orderings a consumer may ask for; the store itself never sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first
    #[default]
    Date,
    Title,
    Path,
}

/// Sort articles in place; ties fall back to the slug
pub fn sort_articles(articles: &mut [Article], key: SortKey) {
    match key {
        SortKey::Date => articles.sort_by(|a, b| {
            Reverse(a.meta.pub_date)
                .cmp(&Reverse(b.meta.pub_date))
                .then_with(|| a.slug().cmp(b.slug()))
        }),
        SortKey::Title => articles.sort_by(|a, b| {
            a.meta
                .title
                .to_lowercase()
                .cmp(&b.meta.title.to_lowercase())
                .then_with(|| a.slug().cmp(b.slug()))
        }),
        SortKey::Path => articles.sort_by(|a, b| a.document.relative_path.cmp(&b.document.relative_path)),
    }
}

/// Newest first
pub fn sort_by_date(articles: &mut [Article]) {
    sort_articles(articles, SortKey::Date);
}
