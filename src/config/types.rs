use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Color scheme the renderer starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the visitor's system preference
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Auto, ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown mode '{}', expected one of auto, light, dark", s))
    }
}

/// Site logo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    /// Asset reference for the logo image
    pub src: String,

    /// Alternative text
    pub alt: String,
}

/// Global site settings handed to the renderer.
///
/// Keys are camelCase on disk. Text fields are required; flags fall back to
/// the values in [`defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title
    pub site_title: String,

    /// Site description
    pub site_description: String,

    /// Default social sharing image
    pub og_image: String,

    /// Header logo
    pub logo: Logo,

    /// Emit canonical link tags
    #[serde(default = "defaults::default_canonical")]
    pub canonical: bool,

    /// Ask crawlers not to index the site
    #[serde(default = "defaults::default_noindex")]
    pub noindex: bool,

    /// Initial color scheme
    #[serde(default)]
    pub mode: ThemeMode,

    /// Animate elements as they scroll into view
    #[serde(default = "defaults::default_scroll_animations")]
    pub scroll_animations: bool,
}

/// Where a site keeps its config, content and public assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    /// Site root, holds the config file
    pub root: PathBuf,

    /// Directory of Markdown articles
    pub content_dir: PathBuf,

    /// Directory that `/`-prefixed asset references resolve against
    pub public_dir: PathBuf,
}

impl SitePaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        SitePaths {
            content_dir: root.join(defaults::DEFAULT_CONTENT_DIR),
            public_dir: root.join(defaults::DEFAULT_PUBLIC_DIR),
            root,
        }
    }

    /// Override the content directory; relative paths are taken from the root
    pub fn with_content_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.content_dir = self.root.join(dir);
        self
    }

    /// Override the public asset directory; relative paths are taken from the root
    pub fn with_public_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.public_dir = self.root.join(dir);
        self
    }
}

impl Default for SitePaths {
    fn default() -> Self {
        SitePaths::new(defaults::default_source())
    }
}
