use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use crate::config::loader::load_config;
use crate::config::types::{SiteConfig, SitePaths};
use crate::config::validation::check_config;
use crate::utils::error::{FolioError, Result};

/// Read-only access to the validated site configuration.
///
/// Clones share one record. There are no setters: the record is fixed for
/// the lifetime of a build.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    config: Arc<SiteConfig>,
}

impl ConfigProvider {
    /// Load and validate the configuration found under `paths.root`
    pub fn load(paths: &SitePaths, config_files: Option<Vec<PathBuf>>) -> Result<Self> {
        let config = load_config(&paths.root, config_files)?;
        Self::from_config(config, paths)
    }

    /// Validate an already built record
    pub fn from_config(config: SiteConfig, paths: &SitePaths) -> Result<Self> {
        let errors: Vec<String> = check_config(&config, paths)
            .into_iter()
            .filter(|issue| issue.is_error())
            .map(|issue| issue.message)
            .collect();

        if !errors.is_empty() {
            return Err(FolioError::Config(errors.join("; ")));
        }

        info!("Site configuration ready: {}", config.site_title);
        Ok(ConfigProvider {
            config: Arc::new(config),
        })
    }

    /// The full configuration record
    pub fn get(&self) -> &SiteConfig {
        &self.config
    }
}
