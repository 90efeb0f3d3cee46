// ABOUTME: Spell table extraction library for the spellbook tools.
// ABOUTME: Fetches a class spell page, extracts spell records from its first table, and writes class JSON.

//! Extracts class spell lists from HTML tables.
//!
//! A page is expected to hold one table whose rows read
//! `line | name, name, ... | level, level, ...`. Each row becomes one
//! [`SpellRecord`] per name, the class name is taken from the nearest heading
//! above the table, and the result is written as a [`ClassDataset`] JSON file.
//!
//! # Example
//!
//! ```no_run
//! use spellbook_extract::{extract_from_str, fetch_html, write_dataset, FetchOptions, SpellError};
//!
//! fn main() -> Result<(), SpellError> {
//!     let url = "https://example.com/spells/druid.html";
//!     let html = fetch_html(url, &FetchOptions::default())?;
//!     let extraction = extract_from_str(&html, url)?;
//!     write_dataset(&extraction.dataset, "druid.json".as_ref())?;
//!     Ok(())
//! }
//! ```

pub mod class_name;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod lines;
pub mod models;
pub mod options;
pub mod order;
pub mod output;
pub mod table;

pub use class_name::{class_name_from_url, infer_class_name};
pub use error::SpellError;
pub use extract::{
    extract_dataset, extract_from_str, extract_rows, locate_table, parse_row, Extraction,
    ParsedRow, RowMismatch, MISSING, UNKNOWN_SUFFIX,
};
pub use fetch::fetch_html;
pub use lines::{group_by_line, highest_per_line, spells_at_level, with_replacement_levels};
pub use models::{ClassDataset, SpellRecord, SpellWithReplacement};
pub use options::{FetchOptions, FetchOptionsBuilder};
pub use order::{level_key, sort_spells};
pub use output::{default_output_path, read_dataset, to_json_string, write_dataset};
