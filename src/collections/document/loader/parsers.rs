use std::path::Path;

use log::debug;

use crate::collections::document::model::{document_id, Document};
use crate::front_matter;
use crate::utils::error::{FolioError, Result};
use crate::utils::fs;

/// Parse one document file below `content_root`
pub fn parse_document(path: &Path, content_root: &Path) -> Result<Document> {
    debug!("Parsing document: {}", path.display());

    let content = fs::read_file(path)?;
    let parsed = front_matter::parse(&content)
        .map_err(|e| FolioError::front_matter(path, e.to_string()))?;

    let relative_path = path
        .strip_prefix(content_root)
        .map(Path::to_path_buf)
        .map_err(|_| {
            FolioError::Content(format!(
                "{} is outside the content directory {}",
                path.display(),
                content_root.display()
            ))
        })?;

    Ok(Document {
        id: document_id(&relative_path),
        path: path.to_path_buf(),
        relative_path,
        front_matter: parsed.front_matter,
        body: parsed.body.to_string(),
    })
}
