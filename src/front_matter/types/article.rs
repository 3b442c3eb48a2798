use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::front_matter::FrontMatter;

/// Front matter keys every article must carry
pub const REQUIRED_KEYS: [&str; 6] = ["title", "pubDate", "description", "author", "image", "tags"];

/// Validated article metadata.
///
/// Every required key is present and non-blank, `pub_date` carries an
/// explicit offset, and `tags` is a non-empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMeta {
    pub title: String,
    #[serde(with = "timestamp")]
    pub pub_date: DateTime<FixedOffset>,
    pub description: String,
    pub author: String,
    pub image: String,
    pub tags: BTreeSet<String>,
}

/// Why front matter did not validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaDefect {
    /// Required key absent or null
    Missing(&'static str),
    /// Required key present but blank
    Blank(&'static str),
    /// `pubDate` is not a timezone-qualified ISO 8601 timestamp
    InvalidDate(String),
    /// `tags` has no entries
    NoTags,
    /// A tag is blank
    BlankTag,
}

impl fmt::Display for MetaDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaDefect::Missing(key) => write!(f, "missing required field '{}'", key),
            MetaDefect::Blank(key) => write!(f, "required field '{}' is empty", key),
            MetaDefect::InvalidDate(raw) => write!(
                f,
                "pubDate '{}' is not a timezone-qualified ISO 8601 timestamp",
                raw
            ),
            MetaDefect::NoTags => f.write_str("tags must contain at least one tag"),
            MetaDefect::BlankTag => f.write_str("tags must not contain empty values"),
        }
    }
}

fn required_text(value: &Option<String>, key: &'static str, defects: &mut Vec<MetaDefect>) -> Option<String> {
    match value {
        None => {
            defects.push(MetaDefect::Missing(key));
            None
        }
        Some(text) if text.trim().is_empty() => {
            defects.push(MetaDefect::Blank(key));
            None
        }
        Some(text) => Some(text.trim().to_string()),
    }
}

impl TryFrom<&FrontMatter> for ArticleMeta {
    type Error = Vec<MetaDefect>;

    /// Validate, collecting every defect rather than stopping at the first
    fn try_from(fm: &FrontMatter) -> Result<Self, Self::Error> {
        let mut defects = Vec::new();

        let title = required_text(&fm.title, "title", &mut defects);
        let raw_date = required_text(&fm.pub_date, "pubDate", &mut defects);
        let description = required_text(&fm.description, "description", &mut defects);
        let author = required_text(&fm.author, "author", &mut defects);
        let image = required_text(&fm.image, "image", &mut defects);

        let pub_date = raw_date.and_then(|raw| match timestamp::parse(&raw) {
            Some(date) => Some(date),
            None => {
                defects.push(MetaDefect::InvalidDate(raw));
                None
            }
        });

        let tags = match &fm.tags {
            None => {
                defects.push(MetaDefect::Missing("tags"));
                None
            }
            Some(list) if list.is_empty() => {
                defects.push(MetaDefect::NoTags);
                None
            }
            Some(list) if list.iter().any(|t| t.trim().is_empty()) => {
                defects.push(MetaDefect::BlankTag);
                None
            }
            Some(list) => Some(list.iter().map(|t| t.trim().to_string()).collect::<BTreeSet<_>>()),
        };

        match (title, pub_date, description, author, image, tags) {
            (Some(title), Some(pub_date), Some(description), Some(author), Some(image), Some(tags))
                if defects.is_empty() =>
            {
                Ok(ArticleMeta {
                    title,
                    pub_date,
                    description,
                    author,
                    image,
                    tags,
                })
            }
            _ => Err(defects),
        }
    }
}

impl ArticleMeta {
    /// Whether the article carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

impl From<&ArticleMeta> for FrontMatter {
    fn from(meta: &ArticleMeta) -> Self {
        FrontMatter {
            title: Some(meta.title.clone()),
            pub_date: Some(timestamp::format(&meta.pub_date)),
            description: Some(meta.description.clone()),
            author: Some(meta.author.clone()),
            image: Some(meta.image.clone()),
            tags: Some(meta.tags.iter().cloned().collect()),
            extra: Default::default(),
        }
    }
}

/// `pubDate` (de)serialization as RFC 3339 text
pub mod timestamp {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Layouts accepted besides strict RFC 3339; all of them carry an offset
    const OFFSET_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%z",
        "%Y-%m-%d %H:%M:%S %z",
    ];

    /// Parse a timezone-qualified ISO 8601 timestamp.
    ///
    /// Dates or times without an offset are rejected.
    pub fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
        let raw = raw.trim();
        DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        })
    }

    pub fn format(date: &DateTime<FixedOffset>) -> String {
        date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    pub fn serialize<S: Serializer>(date: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("'{}' is not a timezone-qualified timestamp", raw))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FrontMatter {
        serde_yaml::from_str(
            "title: Hello\npubDate: 2023-07-02T05:00:00Z\ndescription: First post\nauthor: Sam\nimage: /cover.png\ntags: ['flutter', 'dart']\n",
        )
        .unwrap()
    }

    #[test]
    fn test_complete_front_matter_validates() {
        let meta = ArticleMeta::try_from(&complete()).unwrap();
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.pub_date.offset().local_minus_utc(), 0);
        assert_eq!(meta.tags.len(), 2);
        assert!(meta.has_tag("flutter"));
        assert!(meta.has_tag("dart"));
    }

    #[test]
    fn test_two_tags_order_insensitive() {
        let mut other = complete();
        other.tags = Some(vec!["dart".to_string(), "flutter".to_string()]);
        let a = ArticleMeta::try_from(&complete()).unwrap();
        let b = ArticleMeta::try_from(&other).unwrap();
        assert_eq!(a.tags, b.tags);
        assert_eq!(a.tags.len(), 2);
    }

    #[test]
    fn test_duplicate_tags_collapse() {
        let mut fm = complete();
        fm.tags = Some(vec!["dart".to_string(), "dart".to_string()]);
        let meta = ArticleMeta::try_from(&fm).unwrap();
        assert_eq!(meta.tags.len(), 1);
    }

    #[test]
    fn test_collects_every_defect() {
        let fm: FrontMatter = serde_yaml::from_str("title: ''\npubDate: 2023-07-02\ntags: []\n").unwrap();
        let defects = ArticleMeta::try_from(&fm).unwrap_err();
        assert!(defects.contains(&MetaDefect::Blank("title")));
        assert!(defects.contains(&MetaDefect::InvalidDate("2023-07-02".to_string())));
        assert!(defects.contains(&MetaDefect::Missing("description")));
        assert!(defects.contains(&MetaDefect::Missing("author")));
        assert!(defects.contains(&MetaDefect::Missing("image")));
        assert!(defects.contains(&MetaDefect::NoTags));
    }

    #[test]
    fn test_blank_tag_rejected() {
        let mut fm = complete();
        fm.tags = Some(vec!["dart".to_string(), " ".to_string()]);
        assert_eq!(ArticleMeta::try_from(&fm).unwrap_err(), vec![MetaDefect::BlankTag]);
    }

    #[test]
    fn test_timestamp_formats() {
        assert!(timestamp::parse("2023-07-02T05:00:00Z").is_some());
        assert!(timestamp::parse("2023-07-02T05:00:00.123+05:30").is_some());
        assert!(timestamp::parse("2023-07-02T05:00:00+0530").is_some());
        assert!(timestamp::parse("2023-07-02 05:00:00 +0000").is_some());
        assert!(timestamp::parse("2023-07-02T05:00:00").is_none());
        assert!(timestamp::parse("2023-07-02").is_none());
        assert!(timestamp::parse("Jul 02 2023").is_none());
    }

    #[test]
    fn test_back_to_front_matter() {
        let meta = ArticleMeta::try_from(&complete()).unwrap();
        let fm = FrontMatter::from(&meta);
        assert_eq!(fm.pub_date.as_deref(), Some("2023-07-02T05:00:00Z"));
        assert_eq!(ArticleMeta::try_from(&fm).unwrap(), meta);
    }

    #[test]
    fn test_offset_is_kept() {
        let date = timestamp::parse("2023-07-02T05:00:00+05:30").unwrap();
        assert_eq!(date.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
        assert_eq!(timestamp::format(&date), "2023-07-02T05:00:00+05:30");
    }
}
