//! Tolerant free-text decklist parsing
//!
//! Pasted decklists come from many tools and none of them agree on a
//! format. The parser accepts the common shapes (`2 Sol Ring`,
//! `2x Sol Ring`, `Sol Ring x2`, bare names), skips section headings,
//! comments and sideboard markers, and silently drops anything else.
//! Parsing never fails: a garbage paste just yields fewer entries.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::canonical::canonicalize;

/// One parsed decklist line: a raw card name and its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecklistEntry {
    pub name: String,
    pub quantity: u32,
}

/// Section headings commonly emitted by deck-building tools. Matched
/// case-insensitively after stripping a trailing colon or count.
const SECTION_HEADINGS: &[&str] = &[
    "deck",
    "main",
    "maindeck",
    "mainboard",
    "commander",
    "companion",
    "lands",
    "land",
    "creatures",
    "creature",
    "instants",
    "instant",
    "sorceries",
    "sorcery",
    "artifacts",
    "artifact",
    "enchantments",
    "enchantment",
    "planeswalkers",
    "planeswalker",
    "battles",
    "spells",
    "nonland",
    "sideboard",
    "maybeboard",
    "tokens",
    "other",
];

fn is_section_heading(line: &str) -> bool {
    let mut heading = line.trim_end_matches(':').trim();
    // "Lands (38)" style headings from export tools
    if let Some(open) = heading.find('(') {
        heading = heading[..open].trim();
    }
    let lower = heading.to_lowercase();
    SECTION_HEADINGS.contains(&lower.as_str())
}

/// Parses a raw decklist into entries, one per parseable line.
///
/// Quantities clamp to at least 1. Blank lines, comments (`#`, `//`),
/// sideboard-marked lines (`SB:`) and section headings are skipped.
pub fn parse_decklist(text: &str) -> Vec<DecklistEntry> {
    let leading_qty = Regex::new(r"^(\d+)[xX]?\s+(.+)$").expect("valid regex");
    let trailing_qty = Regex::new(r"^(.+?)\s+[xX](\d+)$").expect("valid regex");

    text.lines()
        .filter_map(|line| parse_line(line, &leading_qty, &trailing_qty))
        .collect()
}

fn parse_line(line: &str, leading: &Regex, trailing: &Regex) -> Option<DecklistEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
        return None;
    }
    if line.to_lowercase().starts_with("sb:") {
        return None;
    }
    if is_section_heading(line) {
        return None;
    }

    let (name, quantity) = if let Some(caps) = leading.captures(line) {
        let qty = caps[1].parse::<u32>().unwrap_or(1);
        (caps[2].to_string(), qty)
    } else if let Some(caps) = trailing.captures(line) {
        let qty = caps[2].parse::<u32>().unwrap_or(1);
        (caps[1].to_string(), qty)
    } else {
        (line.to_string(), 1)
    };

    let name = name.trim().to_string();
    if name.is_empty() {
        return None;
    }

    Some(DecklistEntry {
        name,
        quantity: quantity.max(1),
    })
}

/// Aggregates entries by canonical name, summing quantities.
///
/// Names that canonicalize to the empty string are excluded. The sorted
/// map is what the hasher and every downstream classifier consume, so
/// iteration order is deterministic by construction.
pub fn aggregate(entries: &[DecklistEntry]) -> BTreeMap<String, u32> {
    let mut aggregated = BTreeMap::new();
    for entry in entries {
        let canonical = canonicalize(&entry.name);
        if canonical.is_empty() {
            continue;
        }
        *aggregated.entry(canonical).or_insert(0) += entry.quantity;
    }
    aggregated
}
