use serde::{Deserialize, Serialize};

use super::deserializers::{deserialize_optional_text, deserialize_string_or_seq};

/// Front matter exactly as authored.
///
/// Every field is optional so a defective header still parses; validation
/// into [`super::ArticleMeta`] decides what is missing. Keys the schema does
/// not know are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publish date, kept as written
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Cover image reference
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Tags in source order, duplicates included
    #[serde(default, deserialize_with = "deserialize_string_or_seq", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Keys outside the schema, in source order; keys need not be strings
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

impl FrontMatter {
    /// Tags that appear more than once, compared after trimming
    pub fn duplicate_tags(&self) -> Vec<String> {
        let mut seen = std::collections::BTreeSet::new();
        let mut duplicates = Vec::new();
        for tag in self.tags.iter().flatten() {
            let tag = tag.trim();
            if !seen.insert(tag) && !duplicates.iter().any(|d: &String| d == tag) {
                duplicates.push(tag.to_string());
            }
        }
        duplicates
    }

    /// Serialize back to YAML, without delimiters
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_header() {
        let yaml = r#"
title: Building a Flutter app
pubDate: 2023-07-02T05:00:00Z
description: From zero to store
author: Sam
image: /images/flutter.png
tags: ['flutter', 'dart']
"#;
        let fm: FrontMatter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Building a Flutter app"));
        assert_eq!(fm.pub_date.as_deref(), Some("2023-07-02T05:00:00Z"));
        assert_eq!(fm.tags, Some(vec!["flutter".to_string(), "dart".to_string()]));
        assert!(fm.extra.is_empty());
    }

    #[test]
    fn test_single_string_tag() {
        let fm: FrontMatter = serde_yaml::from_str("tags: rust\n").unwrap();
        assert_eq!(fm.tags, Some(vec!["rust".to_string()]));
    }

    #[test]
    fn test_scalar_values_become_text() {
        let fm: FrontMatter = serde_yaml::from_str("title: 2024\ntags: [2023, go]\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("2024"));
        assert_eq!(fm.tags, Some(vec!["2023".to_string(), "go".to_string()]));
    }

    #[test]
    fn test_null_fields_are_missing() {
        let fm: FrontMatter = serde_yaml::from_str("title:\ntags: ~\n").unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(fm.tags, None);
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let fm: FrontMatter = serde_yaml::from_str("title: T\ndraft: true\n").unwrap();
        assert_eq!(fm.extra.get("draft"), Some(&serde_yaml::Value::Bool(true)));
    }

    #[test]
    fn test_non_string_keys_preserved() {
        let fm: FrontMatter = serde_yaml::from_str("title: T\n2023: recap\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("T"));
        assert_eq!(fm.extra.len(), 1);
        assert_eq!(
            fm.extra.get(&serde_yaml::Value::Number(2023u64.into())),
            Some(&serde_yaml::Value::String("recap".to_string()))
        );
    }

    #[test]
    fn test_duplicate_tags() {
        let fm: FrontMatter = serde_yaml::from_str("tags: [dart, flutter, dart, ' dart']\n").unwrap();
        assert_eq!(fm.duplicate_tags(), vec!["dart".to_string()]);
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = "title: T\npubDate: 2023-01-01T00:00:00+02:00\ntags: [a, b]\nseries: intro\n";
        let fm: FrontMatter = serde_yaml::from_str(yaml).unwrap();
        let again: FrontMatter = serde_yaml::from_str(&fm.to_yaml().unwrap()).unwrap();
        assert_eq!(fm, again);
    }
}
