use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::Value;

use crate::config::defaults::CONFIG_FILES;
use crate::config::types::SiteConfig;
use crate::utils::error::{FolioError, Result};
use crate::utils::fs;

/// Load the site configuration record.
///
/// With `config_files` unset the first default file found in `source_dir`
/// is used. With several files, later ones override earlier ones key by key.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> Result<SiteConfig> {
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => vec![find_default_config_file(&source_dir)?],
    };

    let mut merged = Value::Mapping(Default::default());
    for path in &config_paths {
        debug!("Loading configuration from {}", path.display());
        let layer = read_config_file(path)?;
        merge_values(&mut merged, layer);
    }

    let config: SiteConfig = serde_yaml::from_value(merged).map_err(|e| {
        FolioError::Config(format!("Invalid site configuration: {}", e))
    })?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the default configuration file
pub fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Result<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            FolioError::Config(format!(
                "No configuration file found in {} (looked for {})",
                source_dir.as_ref().display(),
                CONFIG_FILES.join(", ")
            ))
        })
}

/// Read one configuration file into a generic value tree
fn read_config_file(config_path: &Path) -> Result<Value> {
    if !config_path.is_file() {
        return Err(FolioError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_file(config_path).map_err(|e| {
        FolioError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    // Everything is funnelled into one value tree so layers merge uniformly
    let value = match ext.as_str() {
        "yml" | "yaml" | "" => serde_yaml::from_str::<Value>(&content).map_err(|e| e.to_string()),
        "toml" => toml::from_str::<Value>(&content).map_err(|e| e.to_string()),
        "json" => serde_json::from_str::<Value>(&content).map_err(|e| e.to_string()),
        other => {
            return Err(FolioError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            )));
        }
    }
    .map_err(|e| {
        FolioError::Config(format!(
            "Failed to parse configuration ({}): {}",
            config_path.display(),
            e
        ))
    })?;

    match value {
        Value::Mapping(_) => Ok(value),
        // An empty file contributes nothing
        Value::Null => Ok(Value::Mapping(Default::default())),
        _ => Err(FolioError::Config(format!(
            "Configuration in {} must be a mapping",
            config_path.display()
        ))),
    }
}

/// Deep-merge `overlay` into `base`; mappings merge, everything else replaces
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
