use std::process::ExitCode;

use serde_yaml::Value;

use crate::cli::Context;
use crate::config::ConfigProvider;
use crate::utils::error::{FolioError, Result};

/// Handle the 'config' command
pub fn handle_config_command(ctx: &Context, key: Option<&str>) -> Result<ExitCode> {
    let provider = ConfigProvider::load(&ctx.paths, ctx.config_files.clone())?;
    let yaml = serde_yaml::to_value(provider.get())?;

    let value = match key {
        Some(key) => get_nested_value(&yaml, key)
            .ok_or_else(|| FolioError::Config(format!("Key not found: {}", key)))?,
        None => &yaml,
    };

    print!("{}", serde_yaml::to_string(value)?);
    Ok(ExitCode::SUCCESS)
}

/// Look up a dotted camelCase path such as `logo.src`
fn get_nested_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in key.split('.') {
        match current {
            Value::Mapping(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_nested_value() {
        let yaml: Value = serde_yaml::from_str("siteTitle: T\nlogo:\n  src: /l.svg\n").unwrap();
        assert_eq!(
            get_nested_value(&yaml, "logo.src"),
            Some(&Value::String("/l.svg".to_string()))
        );
        assert_eq!(
            get_nested_value(&yaml, "siteTitle"),
            Some(&Value::String("T".to_string()))
        );
        assert_eq!(get_nested_value(&yaml, "logo.alt"), None);
        assert_eq!(get_nested_value(&yaml, "siteTitle.deeper"), None);
    }
}
