//! Site configuration and Markdown content collection for a personal blog.
//!
//! [`config::ConfigProvider`] hands out the validated site record.
//! [`collections::ContentStore`] enumerates articles with their front matter
//! and raw bodies. [`report`] turns authoring defects into a readable report.

pub mod cli;
pub mod collections;
pub mod config;
pub mod front_matter;
pub mod markdown;
pub mod report;
pub mod utils;

pub use collections::{Article, ContentStore, Document};
pub use config::{ConfigProvider, SiteConfig, SitePaths, ThemeMode};
pub use front_matter::{ArticleMeta, FrontMatter};
pub use utils::error::{FolioError, Result};
