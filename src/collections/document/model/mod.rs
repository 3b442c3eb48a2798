use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::front_matter::{ArticleMeta, FrontMatter, MetaDefect};

/// One source file of the content collection
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Slug: path below the content root, without extension, `/`-separated.
    /// An `index` file takes the name of its directory.
    pub id: String,

    /// Absolute path to the document file
    pub path: PathBuf,

    /// Path relative to the content root
    pub relative_path: PathBuf,

    /// Front matter as authored
    pub front_matter: FrontMatter,

    /// Raw Markdown body, unchanged
    pub body: String,
}

impl Document {
    pub fn slug(&self) -> &str {
        &self.id
    }

    /// Directory relative asset references resolve against
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Validate the front matter into an [`Article`]
    pub fn to_article(&self) -> Result<Article, Vec<MetaDefect>> {
        let meta = ArticleMeta::try_from(&self.front_matter)?;
        Ok(Article {
            document: self.clone(),
            meta,
        })
    }

    /// Consuming variant of [`Document::to_article`]
    pub fn into_article(self) -> Result<Article, (Document, Vec<MetaDefect>)> {
        match ArticleMeta::try_from(&self.front_matter) {
            Ok(meta) => Ok(Article { document: self, meta }),
            Err(defects) => Err((self, defects)),
        }
    }
}

/// A document whose front matter validated
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub document: Document,
    pub meta: ArticleMeta,
}

impl Article {
    pub fn slug(&self) -> &str {
        self.document.slug()
    }

    pub fn body(&self) -> &str {
        &self.document.body
    }

    /// Compact view for listings
    pub fn summary(&self) -> ArticleSummary<'_> {
        ArticleSummary {
            slug: self.slug(),
            meta: &self.meta,
        }
    }
}

/// Serializable listing entry: slug plus metadata
#[derive(Debug, Serialize)]
pub struct ArticleSummary<'a> {
    pub slug: &'a str,
    #[serde(flatten)]
    pub meta: &'a ArticleMeta,
}

/// Derive a document id from its path below the content root
pub fn document_id(relative_path: &Path) -> String {
    let without_ext = relative_path.with_extension("");
    let mut parts: Vec<String> = without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.len() > 1 && parts.last().map_or(false, |last| last == "index") {
        parts.pop();
    }

    parts.join("/")
}
