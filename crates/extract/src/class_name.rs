// ABOUTME: Infers the class name for a spell table from the text above it.
// ABOUTME: Falls back to the last path segment of the source URL when no heading qualifies.

use scraper::{ElementRef, Html};

use crate::table::{preceding_text_nodes, stripped_text};

/// Candidates must be shorter than this many characters.
const MAX_TITLE_CHARS: usize = 50;

/// Words that mark a heading as a column caption rather than a class title.
/// Matched case-sensitively.
const CAPTION_WORDS: &[&str] = &["Spell", "Level", "Name"];

/// Returns the nearest qualifying title before `table`, or a name derived from `source_url`.
pub fn infer_class_name(doc: &Html, table: ElementRef<'_>, source_url: &str) -> String {
    preceding_text_nodes(doc, table)
        .into_iter()
        .map(stripped_text)
        .find(|text| is_class_title(text))
        .unwrap_or_else(|| class_name_from_url(source_url))
}

fn is_class_title(text: &str) -> bool {
    !text.is_empty()
        && text.chars().count() < MAX_TITLE_CHARS
        && !CAPTION_WORDS.iter().any(|w| text.contains(w))
}

/// Last path segment of the URL, cut at the first `.`, lower-cased.
///
/// May be empty, e.g. for a URL ending in `/`.
pub fn class_name_from_url(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or_default();
    segment
        .split('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
