use std::path::{Component, Path, PathBuf};

/// How an asset reference found in config or front matter is located
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    /// Served from the public asset root, e.g. `/images/cover.png`
    Public(PathBuf),
    /// Relative to the file that mentions it, e.g. `./cover.png`
    Relative(PathBuf),
    /// Remote or inline reference that is never checked on disk
    External(String),
}

impl AssetRef {
    /// Classify a raw reference string
    pub fn parse(reference: &str) -> Self {
        let reference = reference.trim();
        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("http://")
            || lower.starts_with("https://")
            || lower.starts_with("//")
            || lower.starts_with("data:")
        {
            return AssetRef::External(reference.to_string());
        }

        // Query strings and fragments never name a file
        let reference = reference
            .split(['?', '#'])
            .next()
            .unwrap_or(reference);

        if let Some(stripped) = reference.strip_prefix('/') {
            AssetRef::Public(PathBuf::from(stripped))
        } else {
            AssetRef::Relative(PathBuf::from(reference))
        }
    }

    /// Filesystem location of the asset, or `None` for external references
    pub fn locate(&self, public_dir: &Path, base_dir: &Path) -> Option<PathBuf> {
        match self {
            AssetRef::Public(rel) => Some(normalize_path(public_dir.join(rel))),
            AssetRef::Relative(rel) => Some(normalize_path(base_dir.join(rel))),
            AssetRef::External(_) => None,
        }
    }
}

/// Check that an asset reference points at an existing file.
///
/// External references always resolve.
pub fn asset_exists(reference: &str, public_dir: &Path, base_dir: &Path) -> bool {
    match AssetRef::parse(reference).locate(public_dir, base_dir) {
        Some(path) => path.is_file(),
        None => true,
    }
}

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => {
                // Stay put at the root
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            }
            Component::CurDir => {}
            other => result.push(other),
        }
    }

    result
}

/// Check if a path has one of the given extensions (case-insensitive)
pub fn has_any_extension<P: AsRef<Path>>(path: P, extensions: &[&str]) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_asset_refs() {
        assert_eq!(
            AssetRef::parse("/images/cover.png"),
            AssetRef::Public(PathBuf::from("images/cover.png"))
        );
        assert_eq!(
            AssetRef::parse("./cover.png"),
            AssetRef::Relative(PathBuf::from("./cover.png"))
        );
        assert_eq!(
            AssetRef::parse("https://cdn.example.com/a.png"),
            AssetRef::External("https://cdn.example.com/a.png".to_string())
        );
        assert_eq!(
            AssetRef::parse("/og.png?v=2"),
            AssetRef::Public(PathBuf::from("og.png"))
        );
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("a/./b/../c"), PathBuf::from("a/c"));
        assert_eq!(normalize_path("../x"), PathBuf::from("x"));
    }

    #[test]
    fn test_asset_exists() {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("public");
        fs::create_dir_all(public.join("images")).unwrap();
        fs::write(public.join("images/cover.png"), b"png").unwrap();
        fs::write(dir.path().join("local.png"), b"png").unwrap();

        assert!(asset_exists("/images/cover.png", &public, dir.path()));
        assert!(asset_exists("./local.png", &public, dir.path()));
        assert!(!asset_exists("/images/missing.png", &public, dir.path()));
        assert!(asset_exists("https://example.com/x.png", &public, dir.path()));
    }

    #[test]
    fn test_has_any_extension() {
        assert!(has_any_extension("post.MD", &["md", "markdown"]));
        assert!(!has_any_extension("post.txt", &["md", "markdown"]));
        assert!(!has_any_extension("README", &["md"]));
    }
}
