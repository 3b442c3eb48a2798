mod parsers;

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::collections::document::model::Document;
use crate::utils::error::{FolioError, Result};
use crate::utils::fs::is_ignored_name;
use crate::utils::path::has_any_extension;

pub use parsers::parse_document;

/// File extensions treated as content documents
pub const DOCUMENT_EXTENSIONS: [&str; 3] = ["md", "markdown", "mdx"];

type EntryFilter = fn(&DirEntry) -> bool;

/// The collection of Markdown documents below one directory
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        ContentStore {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate documents lazily in file name order.
    ///
    /// The store is consumed: each pass over the collection starts from a
    /// fresh store and re-reads the source files.
    pub fn documents(self) -> Documents {
        let walker = if self.root.is_dir() {
            let filter: EntryFilter = keep_entry;
            Some(
                WalkDir::new(&self.root)
                    .follow_links(true)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_entry(filter),
            )
        } else {
            warn!("Content directory does not exist: {}", self.root.display());
            None
        };

        Documents {
            walker,
            root: self.root,
        }
    }

    /// Paths of every document, sorted
    pub fn document_paths(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            warn!("Content directory does not exist: {}", self.root.display());
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true).into_iter().filter_entry(keep_entry) {
            let entry = entry?;
            if is_document(&entry) {
                paths.push(entry.into_path());
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Parse every document in parallel; one result per file, sorted by path.
    ///
    /// A directory walk failure is returned as a single error element.
    pub fn parse_all(&self) -> Vec<Result<Document>> {
        let paths = match self.document_paths() {
            Ok(paths) => paths,
            Err(e) => return vec![Err(e)],
        };

        debug!("Parsing {} documents from {}", paths.len(), self.root.display());
        paths
            .par_iter()
            .map(|path| parse_document(path, &self.root))
            .collect()
    }

    /// Parse every document, failing on the first unreadable one
    pub fn load_all(&self) -> Result<Vec<Document>> {
        let documents = self.parse_all().into_iter().collect::<Result<Vec<_>>>()?;
        info!("Loaded {} documents from {}", documents.len(), self.root.display());
        Ok(documents)
    }
}

/// Lazy, single-pass sequence of documents produced by [`ContentStore::documents`]
pub struct Documents {
    walker: Option<walkdir::FilterEntry<walkdir::IntoIter, EntryFilter>>,
    root: PathBuf,
}

impl fmt::Debug for Documents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Documents")
            .field("root", &self.root)
            .field("walking", &self.walker.is_some())
            .finish()
    }
}

impl Iterator for Documents {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let walker = self.walker.as_mut()?;
        loop {
            let entry = match walker.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(FolioError::from(e))),
            };
            if is_document(&entry) {
                return Some(parse_document(entry.path(), &self.root));
            }
        }
    }
}

/// Skip hidden and underscore-prefixed entries below the root
fn keep_entry(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !is_ignored_name(&entry.file_name().to_string_lossy())
}

fn is_document(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && has_any_extension(entry.path(), &DOCUMENT_EXTENSIONS)
}
