use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena};

use crate::markdown::engine::create_comrak_options;
use crate::markdown::types::{BodyStats, Heading, WORDS_PER_MINUTE};

/// Gather body statistics without rendering anything
pub fn analyze(body: &str) -> BodyStats {
    let arena = Arena::new();
    let options = create_comrak_options();
    let root = parse_document(&arena, body, &options);

    let mut stats = BodyStats::default();
    for node in root.descendants() {
        match &node.data.borrow().value {
            NodeValue::Text(text) => stats.words += count_words(text),
            NodeValue::Code(code) => stats.words += count_words(&code.literal),
            NodeValue::CodeBlock(block) => {
                if let Some(lang) = fence_language(&block.info) {
                    if !stats.code_languages.iter().any(|l| l == lang) {
                        stats.code_languages.push(lang.to_string());
                    }
                }
            }
            NodeValue::Heading(heading) => stats.headings.push(Heading {
                level: heading.level,
                text: collect_text(node),
            }),
            _ => {}
        }
    }

    stats.reading_minutes = reading_minutes(stats.words);
    stats
}

/// Whole minutes to read `words`; any prose at all takes at least one
pub fn reading_minutes(words: usize) -> usize {
    if words == 0 {
        0
    } else {
        words.div_ceil(WORDS_PER_MINUTE)
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First word of a fence info string, e.g. `dart` in ```` ```dart title="main.dart" ````
fn fence_language(info: &str) -> Option<&str> {
    info.split_whitespace()
        .next()
        .map(|word| word.trim_start_matches('{').trim_end_matches('}'))
        .filter(|word| !word.is_empty())
}

fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.descendants() {
        match &child.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}
