// ABOUTME: Turns the rows of a spell table into SpellRecords and assembles the ClassDataset.
// ABOUTME: Handles name/level count mismatches by padding with placeholders instead of dropping rows.

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::class_name::infer_class_name;
use crate::error::SpellError;
use crate::models::{ClassDataset, SpellRecord};
use crate::order::sort_spells;
use crate::table::{find_first_table, iterate_rows, raw_text, stripped_text};

/// Placeholder for a name or level absent from a mismatched row.
pub const MISSING: &str = "(missing)";

/// Appended to every name produced from a mismatched row.
pub const UNKNOWN_SUFFIX: &str = " (unknown)";

/// Rows need at least this many cells: line, names, levels.
const MIN_CELLS: usize = 3;

/// A row whose name and level lists have different lengths.
///
/// The row still produces records; this only reports the data-quality problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMismatch {
    pub line: String,
    pub name_count: usize,
    pub level_count: usize,
}

/// Records produced by one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRow {
    pub spells: Vec<SpellRecord>,
    pub mismatch: Option<RowMismatch>,
}

/// Result of extracting a whole page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub dataset: ClassDataset,
    pub mismatches: Vec<RowMismatch>,
    /// Data rows dropped for having fewer than three cells.
    pub rows_skipped: usize,
}

/// Returns the first table of the document.
pub fn locate_table(doc: &Html) -> Result<ElementRef<'_>, SpellError> {
    find_first_table(doc).ok_or(SpellError::NoTableFound)
}

/// Cell texts of every data row with at least three cells.
///
/// Each row yields `[line, names, levels]`; extra cells are ignored. The line
/// label is whitespace-stripped, the other two are kept raw for splitting.
pub fn extract_rows(table: ElementRef<'_>) -> (Vec<[String; 3]>, usize) {
    let mut rows = Vec::new();
    let mut skipped = 0;
    for cells in iterate_rows(table) {
        if cells.len() < MIN_CELLS {
            debug!(cells = cells.len(), "skipping short row");
            skipped += 1;
            continue;
        }
        rows.push([
            stripped_text(cells[0]),
            raw_text(cells[1]),
            raw_text(cells[2]),
        ]);
    }
    (rows, skipped)
}

/// Builds the records for one row from its line label and raw name/level cells.
pub fn parse_row(line: &str, names_cell: &str, levels_cell: &str) -> ParsedRow {
    let names = split_list(names_cell);
    let levels = split_list(levels_cell);

    if names.len() == levels.len() {
        let spells = names
            .into_iter()
            .zip(levels)
            .map(|(name, level)| SpellRecord::new(resolve_name(name, line), line, level))
            .collect();
        return ParsedRow {
            spells,
            mismatch: None,
        };
    }

    warn!(
        "Spell line '{}' has {} names but {} levels.",
        line,
        names.len(),
        levels.len()
    );

    let count = names.len().max(levels.len());
    let spells = (0..count)
        .map(|i| {
            let name = names.get(i).copied().unwrap_or(MISSING);
            let level = levels.get(i).copied().unwrap_or(MISSING);
            let name = format!("{}{}", resolve_name(name, line), UNKNOWN_SUFFIX);
            SpellRecord::new(name, line, level)
        })
        .collect();

    ParsedRow {
        spells,
        mismatch: Some(RowMismatch {
            line: line.to_string(),
            name_count: names.len(),
            level_count: levels.len(),
        }),
    }
}

/// Runs the full pipeline on a parsed document.
pub fn extract_dataset(doc: &Html, source_url: &str) -> Result<Extraction, SpellError> {
    let table = locate_table(doc)?;
    let (rows, rows_skipped) = extract_rows(table);

    let mut spells = Vec::new();
    let mut mismatches = Vec::new();
    for [line, names, levels] in &rows {
        let parsed = parse_row(line, names, levels);
        debug!(line = %line, spells = parsed.spells.len(), "parsed row");
        spells.extend(parsed.spells);
        mismatches.extend(parsed.mismatch);
    }

    let class = infer_class_name(doc, table, source_url);
    Ok(Extraction {
        dataset: ClassDataset::new(class, sort_spells(spells)),
        mismatches,
        rows_skipped,
    })
}

/// Parses `html` and runs [`extract_dataset`].
pub fn extract_from_str(html: &str, source_url: &str) -> Result<Extraction, SpellError> {
    let doc = Html::parse_document(html);
    extract_dataset(&doc, source_url)
}

fn split_list(cell: &str) -> Vec<&str> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// "No change" in the names column means the spell keeps the line's name.
fn resolve_name<'a>(name: &'a str, line: &'a str) -> &'a str {
    if name.trim().to_lowercase() == "no change" {
        line
    } else {
        name
    }
}
