mod content;

use std::fmt;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::collections::ContentStore;
use crate::config::{self, SitePaths};
use crate::utils::error::FolioError;

pub use content::{check_document, check_documents};

/// Location used for issues raised against the site configuration
pub const CONFIG_LOCATION: &str = "site config";

/// How serious an authoring defect is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One authoring defect found in the config or a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    /// File or record the defect belongs to
    pub location: String,
    pub message: String,
}

impl Issue {
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

/// Site check report
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// Number of documents found in the content directory
    pub documents_checked: usize,
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn extend<I: IntoIterator<Item = Issue>>(&mut self, issues: I) {
        self.issues.extend(issues);
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    /// Errors first, then by location
    pub fn sort(&mut self) {
        self.issues.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then_with(|| a.location.cmp(&b.location))
                .then_with(|| a.message.cmp(&b.message))
        });
    }

    pub fn summary(&self) -> String {
        format!(
            "{} document(s) checked, {} error(s), {} warning(s)",
            self.documents_checked,
            self.error_count(),
            self.warning_count()
        )
    }
}

/// Check the site configuration and every document under `paths`.
///
/// Faults that stop a single file from being read become issues against that
/// file so one broken article never hides the others.
pub fn check_site(paths: &SitePaths, config_files: Option<Vec<PathBuf>>) -> Report {
    let mut report = Report::default();

    match config::load_config(&paths.root, config_files) {
        Ok(site) => report.extend(config::check_config(&site, paths)),
        Err(e) => report.push(Issue::error(CONFIG_LOCATION, e.to_string())),
    }

    let store = ContentStore::new(&paths.content_dir);
    let mut documents = Vec::new();
    let mut unreadable = 0;
    for result in store.parse_all() {
        match result {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                if is_document_fault(&e) {
                    unreadable += 1;
                }
                report.push(fault_to_issue(&paths.content_dir, e));
            }
        }
    }

    report.documents_checked = documents.len() + unreadable;
    report.extend(check_documents(&documents, paths));
    report.sort();

    info!("{}", report.summary());
    report
}

/// Whether a fault belongs to one document file rather than to the walk
fn is_document_fault(err: &FolioError) -> bool {
    matches!(err, FolioError::FrontMatter { .. } | FolioError::Io(_))
}

fn fault_to_issue(content_dir: &Path, err: FolioError) -> Issue {
    match err {
        FolioError::FrontMatter { path, message } => {
            let location = path.strip_prefix(content_dir).unwrap_or(&path);
            Issue::error(location.display().to_string(), message)
        }
        other => Issue::error(content_dir.display().to_string(), other.to_string()),
    }
}
