use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::collections::Document;
use crate::config::SitePaths;
use crate::front_matter::{timestamp, ArticleMeta};
use crate::report::Issue;
use crate::utils::path::asset_exists;

/// Check one document for authoring defects
pub fn check_document(doc: &Document, paths: &SitePaths, now: DateTime<Utc>) -> Vec<Issue> {
    let location = doc.relative_path.display().to_string();
    let fm = &doc.front_matter;
    let mut issues = Vec::new();

    if let Err(defects) = ArticleMeta::try_from(fm) {
        issues.extend(defects.iter().map(|d| Issue::error(&location, d.to_string())));
    }

    if let Some(image) = fm.image.as_deref().filter(|i| !i.trim().is_empty()) {
        if !asset_exists(image, &paths.public_dir, doc.base_dir()) {
            issues.push(Issue::error(
                &location,
                format!("image '{}' does not resolve to a file", image),
            ));
        }
    }

    for tag in fm.duplicate_tags() {
        issues.push(Issue::warning(&location, format!("tag '{}' is listed more than once", tag)));
    }

    if let Some(date) = fm.pub_date.as_deref().and_then(timestamp::parse) {
        if date > now {
            issues.push(Issue::warning(
                &location,
                format!("pubDate {} is in the future", timestamp::format(&date)),
            ));
        }
    }

    issues
}

/// Check every document, plus defects that only show across documents
pub fn check_documents(documents: &[Document], paths: &SitePaths) -> Vec<Issue> {
    let now = Utc::now();
    let mut issues: Vec<Issue> = documents
        .par_iter()
        .flat_map_iter(|doc| check_document(doc, paths, now))
        .collect();

    let mut by_slug: BTreeMap<&str, Vec<&Document>> = BTreeMap::new();
    for doc in documents {
        by_slug.entry(doc.slug()).or_default().push(doc);
    }
    for (slug, docs) in by_slug.into_iter().filter(|(_, docs)| docs.len() > 1) {
        let files: Vec<String> = docs
            .iter()
            .map(|d| d.relative_path.display().to_string())
            .collect();
        for doc in docs {
            issues.push(Issue::error(
                doc.relative_path.display().to_string(),
                format!("slug '{}' is shared by {}", slug, files.join(", ")),
            ));
        }
    }

    issues
}
