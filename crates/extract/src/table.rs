// ABOUTME: Thin HTML traversal layer over scraper for spell tables.
// ABOUTME: Finds the first table, walks its rows and cells, and lists heading-like elements before it.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td, th").unwrap());

/// Tags considered when looking for a class title above the table.
pub const TITLE_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "b", "strong", "p"];

/// Returns the first `<table>` in document order.
pub fn find_first_table(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&TABLE).next()
}

/// Returns the cells of every row in the table except the first.
///
/// Rows and cells are matched at any depth, so rows of a nested table are
/// included and a row's cells include those of anything nested in it.
pub fn iterate_rows<'a>(table: ElementRef<'a>) -> Vec<Vec<ElementRef<'a>>> {
    table
        .select(&ROW)
        .skip(1)
        .map(|row| row.select(&CELL).collect())
        .collect()
}

/// Returns title-like elements whose start tag comes before `table`, nearest first.
///
/// Ancestors of the table are included.
pub fn preceding_text_nodes<'a>(doc: &'a Html, table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut found = Vec::new();
    for node in doc.tree.root().descendants() {
        if node.id() == table.id() {
            break;
        }
        if let Some(el) = ElementRef::wrap(node) {
            let name = el.value().name();
            if TITLE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(name)) {
                found.push(el);
            }
        }
    }
    found.reverse();
    found
}

/// Text of every descendant text node, each trimmed, joined with no separator.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Descendant text exactly as it appears in the markup.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}
