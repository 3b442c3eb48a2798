use std::path::PathBuf;

/// Configuration file names to look for, in order of preference
pub const CONFIG_FILES: [&str; 4] = ["site.yml", "site.yaml", "site.toml", "site.json"];

/// Content directory, relative to the site root
pub const DEFAULT_CONTENT_DIR: &str = "src/content/blog";

/// Public asset directory, relative to the site root
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_canonical() -> bool {
    true
}

pub fn default_noindex() -> bool {
    false
}

pub fn default_scroll_animations() -> bool {
    false
}
