use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Common result type for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Error types for Folio operations
///
/// These are faults: something stopped the crate from reading its inputs.
/// Authoring defects inside otherwise readable content are reported as
/// [`crate::report::Issue`] values instead.
#[derive(Debug, Error)]
pub enum FolioError {
    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Front matter could not be located or decoded
    #[error("Front matter error in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    /// Content collection error
    #[error("Content error: {0}")]
    Content(String),

    /// Directory walk error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error message
    #[error("{0}")]
    Generic(String),
}

impl FolioError {
    pub fn front_matter(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        FolioError::FrontMatter {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<String> for FolioError {
    fn from(msg: String) -> Self {
        FolioError::Generic(msg)
    }
}

impl From<&str> for FolioError {
    fn from(msg: &str) -> Self {
        FolioError::Generic(msg.to_string())
    }
}
