// ABOUTME: Per-line views over extracted spells, as used by the spell planner.
// ABOUTME: Groups spells by line, computes replacement levels, and picks the best spell per line at a level.

use crate::models::{SpellRecord, SpellWithReplacement};
use crate::order::{level_key, numeric_level};

/// Spells grouped by line, lines in first-seen order, each group sorted by level.
pub fn group_by_line(spells: &[SpellRecord]) -> Vec<(&str, Vec<&SpellRecord>)> {
    let mut groups: Vec<(&str, Vec<&SpellRecord>)> = Vec::new();
    for spell in spells {
        let existing = groups.iter().position(|(line, _)| *line == spell.line);
        match existing {
            Some(i) => groups[i].1.push(spell),
            None => groups.push((spell.line.as_str(), vec![spell])),
        }
    }
    for (_, members) in &mut groups {
        members.sort_by_key(|s| level_key(&s.level));
    }
    groups
}

/// Each spell paired with the level of the next spell in its line.
///
/// The last spell of a line, or one followed by a non-numeric level, has no
/// replacement level. Output is sorted by level.
pub fn with_replacement_levels(spells: &[SpellRecord]) -> Vec<SpellWithReplacement> {
    let mut out: Vec<SpellWithReplacement> = group_by_line(spells)
        .into_iter()
        .flat_map(|(_, members)| {
            let next_levels: Vec<Option<i64>> = members
                .iter()
                .skip(1)
                .map(|s| numeric_level(&s.level))
                .chain(std::iter::once(None))
                .collect();
            members
                .into_iter()
                .zip(next_levels)
                .map(|(spell, replaced_at_level)| SpellWithReplacement {
                    spell: spell.clone(),
                    replaced_at_level,
                })
                .collect::<Vec<_>>()
        })
        .collect();
    out.sort_by_key(|s| level_key(&s.spell.level));
    out
}

/// Spells with a numeric level no higher than `level`, sorted by level.
pub fn spells_at_level(spells: &[SpellRecord], level: i64) -> Vec<&SpellRecord> {
    let mut out: Vec<&SpellRecord> = spells
        .iter()
        .filter(|s| numeric_level(&s.level).is_some_and(|l| l <= level))
        .collect();
    out.sort_by_key(|s| level_key(&s.level));
    out
}

/// For each line, the highest-level spell available at `level`.
///
/// The first spell seen wins when two share a level. Sorted by level.
pub fn highest_per_line(spells: &[SpellRecord], level: i64) -> Vec<&SpellRecord> {
    let mut best: Vec<&SpellRecord> = Vec::new();
    for spell in spells {
        let Some(l) = numeric_level(&spell.level).filter(|l| *l <= level) else {
            continue;
        };
        let existing = best.iter().position(|b| b.line == spell.line);
        match existing {
            Some(i) if level_key(&best[i].level) < l => best[i] = spell,
            Some(_) => {}
            None => best.push(spell),
        }
    }
    best.sort_by_key(|s| level_key(&s.level));
    best
}
