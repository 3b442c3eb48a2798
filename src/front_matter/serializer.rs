use serde::Serialize;

use crate::utils::error::Result;

/// Wrap serialized metadata in `---` delimiters
pub fn to_front_matter_block<T: Serialize>(meta: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(meta)?;
    Ok(format!("---\n{}---\n", yaml))
}

/// Full document text: front matter block followed by the body
pub fn render_document<T: Serialize>(meta: &T, body: &str) -> Result<String> {
    let mut out = to_front_matter_block(meta)?;
    out.push_str(body);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_matter::{parse, ArticleMeta, FrontMatter};

    fn meta() -> ArticleMeta {
        let fm: FrontMatter = serde_yaml::from_str(
            "title: 'Dart: null safety'\npubDate: 2023-07-02T05:00:00.250+05:30\ndescription: A tour\nauthor: Sam\nimage: ./cover.png\ntags: [flutter, dart]\n",
        )
        .unwrap();
        ArticleMeta::try_from(&fm).unwrap()
    }

    #[test]
    fn test_meta_round_trip() {
        let original = meta();
        let text = render_document(&original, "\n# Hello\n").unwrap();

        let parsed = parse(&text).unwrap();
        let reparsed = ArticleMeta::try_from(&parsed.front_matter).unwrap();
        assert_eq!(reparsed, original);
        assert_eq!(reparsed.pub_date.offset(), original.pub_date.offset());
        assert_eq!(parsed.body, "\n# Hello\n");
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let once = render_document(&meta(), "body").unwrap();
        let parsed = parse(&once).unwrap();
        let twice = render_document(&ArticleMeta::try_from(&parsed.front_matter).unwrap(), parsed.body).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_lenient_front_matter_round_trip() {
        let text = "---\ntitle: T\ntags: [b, a, b]\nseries: intro\n---\nbody";
        let parsed = parse(text).unwrap();
        let rendered = render_document(&parsed.front_matter, parsed.body).unwrap();
        let again = parse(&rendered).unwrap();
        assert_eq!(again, parsed);
    }
}
