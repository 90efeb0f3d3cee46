// ABOUTME: Level-based ordering of spell records.
// ABOUTME: Numeric levels sort ascending; anything else sorts last, keeping extraction order on ties.

use crate::models::SpellRecord;

/// Sort key used for levels that are not integers.
pub const NON_NUMERIC_LEVEL_KEY: i64 = 9999;

/// Parses a level as an integer, or returns [`NON_NUMERIC_LEVEL_KEY`].
pub fn level_key(level: &str) -> i64 {
    level.trim().parse().unwrap_or(NON_NUMERIC_LEVEL_KEY)
}

/// Parses a level as an integer.
pub fn numeric_level(level: &str) -> Option<i64> {
    level.trim().parse().ok()
}

/// Stable sort by [`level_key`].
pub fn sort_spells(mut spells: Vec<SpellRecord>) -> Vec<SpellRecord> {
    spells.sort_by_key(|s| level_key(&s.level));
    spells
}
