// ABOUTME: Writes and reads class spell datasets as JSON files.
// ABOUTME: Output is indented with four spaces and keeps non-ASCII characters unescaped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::error::SpellError;
use crate::models::ClassDataset;

/// Directory datasets are written to when no path is given.
pub const DEFAULT_ASSETS_DIR: &str = "public/assets";

const INDENT: &[u8] = b"    ";

/// `public/assets/<class_name>.json`
pub fn default_output_path(class_name: &str) -> PathBuf {
    Path::new(DEFAULT_ASSETS_DIR).join(format!("{}.json", class_name))
}

/// Serializes the dataset with four-space indentation.
pub fn to_json_string(dataset: &ClassDataset) -> Result<String, SpellError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    dataset.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Creates or overwrites `path` with the dataset's JSON.
///
/// The parent directory must already exist.
pub fn write_dataset(dataset: &ClassDataset, path: &Path) -> Result<(), SpellError> {
    let json = to_json_string(dataset)?;
    fs::write(path, json).map_err(|e| SpellError::io(path, e))?;
    info!(path = %path.display(), spells = dataset.spells.len(), "wrote dataset");
    Ok(())
}

/// Reads a dataset file written by [`write_dataset`] or maintained by hand.
pub fn read_dataset(path: &Path) -> Result<ClassDataset, SpellError> {
    let text = fs::read_to_string(path).map_err(|e| SpellError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}
