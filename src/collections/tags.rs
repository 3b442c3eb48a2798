use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::collections::document::Article;

/// Tag to article slugs, both sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagIndex {
    tags: BTreeMap<String, BTreeSet<String>>,
}

impl TagIndex {
    pub fn build<'a, I>(articles: I) -> Self
    where
        I: IntoIterator<Item = &'a Article>,
    {
        let mut tags: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for article in articles {
            for tag in &article.meta.tags {
                tags.entry(tag.clone())
                    .or_default()
                    .insert(article.slug().to_string());
            }
        }
        TagIndex { tags }
    }

    /// Slugs of the articles carrying `tag`
    pub fn get(&self, tag: &str) -> Option<&BTreeSet<String>> {
        self.tags.get(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.tags.iter().map(|(tag, slugs)| (tag.as_str(), slugs))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
