use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{DateTime, FixedOffset, Local};
use log::{info, warn};

use crate::cli::types::Commands;
use crate::cli::Context;
use crate::front_matter::{self, render_document, timestamp, ArticleMeta, FrontMatter, MetaDefect};
use crate::utils::error::{FolioError, Result};
use crate::utils::fs;

/// Handle the 'new' command to scaffold an article
pub fn handle_new_command(ctx: &Context, command: &Commands) -> Result<ExitCode> {
    let Commands::New { title, author, description, image, tags, force } = command else {
        return Err(FolioError::Generic("'new' handler called for another command".to_string()));
    };

    let meta = scaffold_meta(
        title,
        author,
        description.as_deref(),
        image,
        tags,
        Local::now().fixed_offset(),
    )?;

    let path = create_article(&ctx.paths.content_dir, &meta, *force)?;
    info!("Created article: {}", path.display());
    println!("{}", path.display());

    Ok(ExitCode::SUCCESS)
}

/// Validate command line values into article metadata.
///
/// Values go through the same checks as authored front matter, so padding
/// is trimmed and blank fields are rejected before anything is written.
pub fn scaffold_meta(
    title: &str,
    author: &str,
    description: Option<&str>,
    image: &str,
    tags: &[String],
    now: DateTime<FixedOffset>,
) -> Result<ArticleMeta> {
    let fm = FrontMatter {
        title: Some(title.to_string()),
        pub_date: Some(timestamp::format(&now)),
        description: Some(description.unwrap_or(title).to_string()),
        author: Some(author.to_string()),
        image: Some(image.to_string()),
        tags: Some(tags.to_vec()),
        ..FrontMatter::default()
    };

    ArticleMeta::try_from(&fm)
        .map_err(|defects| FolioError::Content(format!("Invalid article: {}", describe(&defects))))
}

/// Write a new article named after the slug of its title.
///
/// Nothing is written unless `meta` validates as it stands. The written file
/// is read back and removed again if it does not reproduce `meta`.
pub fn create_article(content_dir: &Path, meta: &ArticleMeta, force: bool) -> Result<PathBuf> {
    match ArticleMeta::try_from(&FrontMatter::from(meta)) {
        Ok(normalized) if &normalized == meta => {}
        Ok(_) => {
            return Err(FolioError::Content(
                "Invalid article: fields must not have leading or trailing whitespace".to_string(),
            ))
        }
        Err(defects) => {
            return Err(FolioError::Content(format!("Invalid article: {}", describe(&defects))))
        }
    }

    let file_slug = slug::slugify(&meta.title);
    if file_slug.is_empty() {
        return Err(FolioError::Content(format!(
            "Title '{}' does not produce a usable file name",
            meta.title
        )));
    }

    let path = content_dir.join(format!("{}.md", file_slug));
    if path.exists() && !force {
        return Err(FolioError::Content(format!(
            "{} already exists, use --force to overwrite",
            path.display()
        )));
    }

    let body = format!("\n# {}\n\nWrite something worth reading.\n", meta.title);
    fs::write_file(&path, &render_document(meta, &body)?)?;

    if let Err(e) = verify_written(&path, meta) {
        if let Err(rm) = std::fs::remove_file(&path) {
            warn!("Failed to remove {}: {}", path.display(), rm);
        }
        return Err(e);
    }

    Ok(path)
}

fn verify_written(path: &Path, meta: &ArticleMeta) -> Result<()> {
    let written = fs::read_file(path)?;
    let parsed = front_matter::parse(&written).map_err(|e| FolioError::front_matter(path, e.to_string()))?;
    let reread = ArticleMeta::try_from(&parsed.front_matter)
        .map_err(|defects| FolioError::front_matter(path, describe(&defects)))?;
    if &reread != meta {
        return Err(FolioError::front_matter(path, "written front matter does not read back identically"));
    }
    Ok(())
}

fn describe(defects: &[MetaDefect]) -> String {
    let reasons: Vec<String> = defects.iter().map(ToString::to_string).collect();
    reasons.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: &str) -> ArticleMeta {
        ArticleMeta {
            title: title.to_string(),
            pub_date: Local::now().fixed_offset(),
            description: "Desc".to_string(),
            author: "Sam".to_string(),
            image: "/images/placeholder.png".to_string(),
            tags: ["flutter", "dart"].iter().map(|t| t.to_string()).collect(),
        }
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_create_article() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_article(dir.path(), &meta("Hello, Flutter & Dart!"), false).unwrap();
        assert_eq!(path, dir.path().join("hello-flutter-dart.md"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("---\n"));
        assert!(written.contains("# Hello, Flutter & Dart!"));
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        create_article(dir.path(), &meta("Hello"), false).unwrap();
        assert!(create_article(dir.path(), &meta("Hello"), false).is_err());
        assert!(create_article(dir.path(), &meta("Hello"), true).is_ok());
    }

    #[test]
    fn test_rejects_unsluggable_title() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_article(dir.path(), &meta("!!!"), false).is_err());
    }

    #[test]
    fn test_padded_description_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut padded = meta("Hello");
        padded.description = " padded ".to_string();

        assert!(create_article(dir.path(), &padded, false).is_err());
        assert!(!dir.path().join("hello.md").exists());

        // A corrected retry is not blocked by a leftover file
        assert!(create_article(dir.path(), &meta("Hello"), false).is_ok());
    }

    #[test]
    fn test_empty_image_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut blank = meta("Hello");
        blank.image = String::new();

        let err = create_article(dir.path(), &blank, false).unwrap_err();
        assert!(err.to_string().contains("'image'"));
        assert!(!dir.path().join("hello.md").exists());
    }

    #[test]
    fn test_scaffold_meta_trims_values() {
        let now = Local::now().fixed_offset();
        let meta = scaffold_meta(
            " Hello ",
            " Sam ",
            Some(" padded "),
            " /images/cover.png ",
            &tags(&[" dart", "flutter "]),
            now,
        )
        .unwrap();
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.author, "Sam");
        assert_eq!(meta.description, "padded");
        assert_eq!(meta.image, "/images/cover.png");
        assert!(meta.has_tag("dart") && meta.has_tag("flutter"));
        assert_eq!(meta.pub_date, now);

        let dir = tempfile::tempdir().unwrap();
        assert!(create_article(dir.path(), &meta, false).is_ok());
    }

    #[test]
    fn test_scaffold_meta_description_defaults_to_title() {
        let meta = scaffold_meta("Hello", "Sam", None, "/i.png", &tags(&["dart"]), Local::now().fixed_offset()).unwrap();
        assert_eq!(meta.description, "Hello");
    }

    #[test]
    fn test_scaffold_meta_rejects_blanks() {
        let now = Local::now().fixed_offset();
        assert!(scaffold_meta("Hello", " ", None, "/i.png", &tags(&["dart"]), now).is_err());
        assert!(scaffold_meta("Hello", "Sam", None, "", &tags(&["dart"]), now).is_err());
        assert!(scaffold_meta("Hello", "Sam", None, "/i.png", &tags(&[" "]), now).is_err());
    }
}
