use comrak::Options;

/// GitHub Flavored Markdown parse options.
///
/// Only parse-side extensions matter here: bodies are analysed, not rendered.
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    options.extension.front_matter_delimiter = None;

    options.parse.smart = false;

    options
}
