//! Deck classification: tallies, warning flags and the cacheable summary

pub mod tally;
pub mod warnings;

pub use tally::{tally_deck, DeckTally, TallyRules};
pub use warnings::{infer_warnings, WarningFlag, WarningTargets};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::card::CardMetadata;
use crate::types::Format;

/// Canonical ordering for the color identity string.
const WUBRG: [char; 5] = ['W', 'U', 'B', 'R', 'G'];

/// Derived, immutable-per-hash summary of a pasted decklist.
///
/// This is the unit the paste-summary cache stores and the prompt composer
/// consumes. Rebuilt from scratch whenever the decklist text changes;
/// `card_names` is only as exhaustive as what was parseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckContextSummary {
    pub deck_hash: String,
    pub format: Format,
    pub commander: Option<String>,
    pub colors: String,
    pub land_count: u32,
    pub curve_histogram: [u32; 5],
    pub ramp: u32,
    pub removal: u32,
    pub draw: u32,
    pub board_wipes: u32,
    pub archetype_tags: Vec<String>,
    pub warning_flags: Vec<WarningFlag>,
    pub card_names: Vec<String>,
    pub card_count: u32,
}

/// Union of per-card color identities in fixed WUBRG order.
///
/// Cards missing from the metadata map, or with no recorded identity,
/// contribute nothing.
pub fn deck_colors(
    aggregated: &BTreeMap<String, u32>,
    metadata: &HashMap<String, CardMetadata>,
) -> String {
    let mut present = [false; 5];
    for name in aggregated.keys() {
        let Some(identity) = metadata.get(name).and_then(|m| m.color_identity.as_deref()) else {
            continue;
        };
        for c in identity.chars() {
            if let Some(index) = WUBRG.iter().position(|w| *w == c.to_ascii_uppercase()) {
                present[index] = true;
            }
        }
    }

    WUBRG
        .iter()
        .zip(present)
        .filter_map(|(c, seen)| seen.then_some(*c))
        .collect()
}
