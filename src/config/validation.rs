use log::debug;

use crate::config::types::{SiteConfig, SitePaths};
use crate::report::{Issue, CONFIG_LOCATION};
use crate::utils::path::asset_exists;

/// Check the configuration record for authoring defects.
///
/// Relative asset references resolve against the site root.
pub fn check_config(config: &SiteConfig, paths: &SitePaths) -> Vec<Issue> {
    let mut issues = Vec::new();

    let required = [
        ("siteTitle", &config.site_title),
        ("siteDescription", &config.site_description),
        ("ogImage", &config.og_image),
        ("logo.src", &config.logo.src),
        ("logo.alt", &config.logo.alt),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            issues.push(Issue::error(CONFIG_LOCATION, format!("'{}' must not be empty", key)));
        }
    }

    let assets = [("ogImage", &config.og_image), ("logo.src", &config.logo.src)];
    for (key, reference) in assets {
        if reference.trim().is_empty() {
            continue;
        }
        if !asset_exists(reference, &paths.public_dir, &paths.root) {
            issues.push(Issue::error(
                CONFIG_LOCATION,
                format!("'{}' points at '{}', which does not resolve to a file", key, reference),
            ));
        }
    }

    debug!("Configuration check found {} issue(s)", issues.len());
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Logo, ThemeMode};
    use std::fs;

    fn sample() -> SiteConfig {
        SiteConfig {
            site_title: "Dev Notes".to_string(),
            site_description: "Notes".to_string(),
            og_image: "/og.png".to_string(),
            logo: Logo {
                src: "/logo.svg".to_string(),
                alt: "Logo".to_string(),
            },
            canonical: true,
            noindex: false,
            mode: ThemeMode::Auto,
            scroll_animations: true,
        }
    }

    fn site_with_assets() -> (tempfile::TempDir, SitePaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = SitePaths::new(dir.path());
        fs::create_dir_all(&paths.public_dir).unwrap();
        fs::write(paths.public_dir.join("og.png"), b"png").unwrap();
        fs::write(paths.public_dir.join("logo.svg"), b"<svg/>").unwrap();
        (dir, paths)
    }

    #[test]
    fn test_valid_config_has_no_issues() {
        let (_dir, paths) = site_with_assets();
        assert!(check_config(&sample(), &paths).is_empty());
    }

    #[test]
    fn test_blank_fields_reported() {
        let (_dir, paths) = site_with_assets();
        let mut config = sample();
        config.site_title = "  ".to_string();
        config.logo.alt = String::new();

        let issues = check_config(&config, &paths);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(Issue::is_error));
        assert!(issues[0].message.contains("siteTitle"));
        assert!(issues[1].message.contains("logo.alt"));
    }

    #[test]
    fn test_unresolvable_asset_reported() {
        let (_dir, paths) = site_with_assets();
        let mut config = sample();
        config.og_image = "/missing.png".to_string();

        let issues = check_config(&config, &paths);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("ogImage"));
    }

    #[test]
    fn test_remote_asset_accepted() {
        let (_dir, paths) = site_with_assets();
        let mut config = sample();
        config.og_image = "https://cdn.example.com/og.png".to_string();
        assert!(check_config(&config, &paths).is_empty());
    }
}
