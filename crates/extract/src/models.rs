// ABOUTME: Data models for extracted spell data.
// ABOUTME: SpellRecord and ClassDataset serialize to the class JSON file format.

use serde::{Deserialize, Serialize};

/// A single spell as listed in a class spell table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRecord {
    pub name: String,
    pub line: String,
    pub level: String,
}

impl SpellRecord {
    pub fn new(
        name: impl Into<String>,
        line: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            line: line.into(),
            level: level.into(),
        }
    }
}

/// All spells extracted for one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDataset {
    pub class: String,
    pub spells: Vec<SpellRecord>,
    /// Spell names the planner lists without a quality tier.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub noquality: Vec<String>,
}

impl ClassDataset {
    pub fn new(class: impl Into<String>, spells: Vec<SpellRecord>) -> Self {
        Self {
            class: class.into(),
            spells,
            noquality: Vec::new(),
        }
    }
}

/// A spell annotated with the level at which the next spell in its line takes over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellWithReplacement {
    #[serde(flatten)]
    pub spell: SpellRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced_at_level: Option<i64>,
}
