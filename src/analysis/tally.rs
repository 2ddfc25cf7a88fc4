//! Keyword-rule tally engine over cached card metadata
//!
//! Oracle-text matching is inherently approximate; each category is an
//! independently testable predicate over a compiled pattern set so the
//! keyword lists can grow without touching the aggregation loop. A card
//! may land in several categories at once, and every match counts the
//! entry's full quantity.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::card::CardMetadata;

/// Ramp artifacts recognized by canonical name when oracle text is absent.
/// The metadata cache is partial, and these staples carry most of the ramp
/// signal in real decks.
const RAMP_ARTIFACT_NAMES: &[&str] = &[
    "sol ring",
    "mana crypt",
    "mana vault",
    "arcane signet",
    "fellwar stone",
    "mind stone",
    "thought vessel",
    "commander's sphere",
    "chromatic lantern",
    "gilded lotus",
    "thran dynamo",
    "worn powerstone",
    "everflowing chalice",
    "wayfarer's bauble",
];

/// Board wipes recognized by canonical name when oracle text is absent.
const WIPE_NAMES: &[&str] = &[
    "wrath of god",
    "damnation",
    "blasphemous act",
    "toxic deluge",
    "cyclonic rift",
    "supreme verdict",
    "austere command",
    "merciless eviction",
    "farewell",
    "vanquish the horde",
];

/// Per-category strategic counts plus the mana-value curve histogram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckTally {
    pub lands: u32,
    pub ramp: u32,
    pub draw: u32,
    pub removal: u32,
    pub wipes: u32,
    pub curve: [u32; 5],
}

impl DeckTally {
    /// Total cards with a known mana value; never exceeds the deck size.
    pub fn curve_total(&self) -> u32 {
        self.curve.iter().sum()
    }
}

/// Compiled classification rules. Build once, reuse across requests.
#[derive(Debug)]
pub struct TallyRules {
    draw: Regex,
    ramp_mana: Regex,
    ramp_tutor: Regex,
    removal: Regex,
    wipe: Regex,
}

impl Default for TallyRules {
    fn default() -> Self {
        Self::new()
    }
}

impl TallyRules {
    pub fn new() -> Self {
        Self {
            draw: Regex::new(r"draw a card|scry [1-9]|investigate").expect("valid regex"),
            ramp_mana: Regex::new(r"add \{[wubrgc]\}|add (one|two|three|\d+) mana")
                .expect("valid regex"),
            ramp_tutor: Regex::new(r"search your library for (a|an|up to \w+)[^.]*land")
                .expect("valid regex"),
            removal: Regex::new(
                r"destroy target|exile target|counter target|fights? (target|up to|another)|deals? \d+ damage to (any target|target)",
            )
            .expect("valid regex"),
            wipe: Regex::new(r"destroy all|exile all|each creature|each (other )?permanent")
                .expect("valid regex"),
        }
    }

    /// A card is a land when its type line says so.
    pub fn is_land(&self, metadata: &CardMetadata) -> bool {
        metadata.type_line_lower().contains("land")
    }

    /// Card advantage: cantrips, scry and investigate effects.
    pub fn is_draw(&self, metadata: &CardMetadata) -> bool {
        self.draw.is_match(&metadata.oracle_text_lower())
    }

    /// Mana acceleration: mana-producing text, land tutors, or a known
    /// ramp artifact by name for cards with sparse metadata.
    pub fn is_ramp(&self, canonical_name: &str, metadata: &CardMetadata) -> bool {
        let oracle = metadata.oracle_text_lower();
        if self.ramp_mana.is_match(&oracle) || self.ramp_tutor.is_match(&oracle) {
            return true;
        }
        RAMP_ARTIFACT_NAMES.contains(&canonical_name)
            || canonical_name.contains("signet")
            || canonical_name.starts_with("talisman of")
    }

    /// Spot interaction: destroy/exile/counter/fight/burn-a-target text.
    pub fn is_removal(&self, metadata: &CardMetadata) -> bool {
        self.removal.is_match(&metadata.oracle_text_lower())
    }

    /// Mass interaction, by oracle text or by well-known wipe name.
    pub fn is_wipe(&self, canonical_name: &str, metadata: &CardMetadata) -> bool {
        self.wipe.is_match(&metadata.oracle_text_lower()) || WIPE_NAMES.contains(&canonical_name)
    }

    /// Curve bucket for a known mana value: 0-1, 2, 3, 4, 5+.
    pub fn curve_bucket(mana_value: f64) -> usize {
        let value = mana_value.floor() as i64;
        match value {
            i64::MIN..=1 => 0,
            2 => 1,
            3 => 2,
            4 => 3,
            _ => 4,
        }
    }
}

/// Tallies an aggregated decklist against a partial metadata map.
///
/// Pure function: unknown cards (missing from the map) match nothing and
/// contribute to no curve bucket.
pub fn tally_deck(
    aggregated: &BTreeMap<String, u32>,
    metadata: &HashMap<String, CardMetadata>,
    rules: &TallyRules,
) -> DeckTally {
    let mut tally = DeckTally::default();
    let unknown = CardMetadata::default();

    for (name, &quantity) in aggregated {
        let card = metadata.get(name).unwrap_or(&unknown);

        let is_land = rules.is_land(card);
        if is_land {
            tally.lands += quantity;
        }
        // Mana-producing lands are mana base, not ramp.
        if !is_land && rules.is_ramp(name, card) {
            tally.ramp += quantity;
        }
        if rules.is_draw(card) {
            tally.draw += quantity;
        }
        if rules.is_removal(card) {
            tally.removal += quantity;
        }
        if rules.is_wipe(name, card) {
            tally.wipes += quantity;
        }
        if let Some(mana_value) = card.mana_value {
            tally.curve[TallyRules::curve_bucket(mana_value)] += quantity;
        }
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn rules() -> TallyRules {
        TallyRules::new()
    }

    #[test]
    fn test_land_by_type_line() {
        let forest = CardMetadata::new().with_type_line("Basic Land — Forest");
        assert!(rules().is_land(&forest));

        let dryad = CardMetadata::new().with_type_line("Creature — Dryad");
        assert!(!rules().is_land(&dryad));
    }

    #[test]
    fn test_draw_patterns() {
        let r = rules();
        assert!(r.is_draw(&CardMetadata::new().with_oracle_text("Draw a card.")));
        assert!(r.is_draw(&CardMetadata::new().with_oracle_text("Scry 2, then draw.")));
        assert!(r.is_draw(&CardMetadata::new().with_oracle_text("Investigate twice.")));
        assert!(!r.is_draw(&CardMetadata::new().with_oracle_text("Discard a card.")));
    }

    #[test]
    fn test_ramp_by_oracle_text() {
        let r = rules();
        assert!(r.is_ramp(
            "llanowar elves",
            &CardMetadata::new().with_oracle_text("{T}: Add {G}.")
        ));
        assert!(r.is_ramp(
            "cultivate",
            &CardMetadata::new().with_oracle_text(
                "Search your library for up to two basic land cards."
            )
        ));
    }

    #[test]
    fn test_ramp_name_fallback_without_metadata() {
        let r = rules();
        let unknown = CardMetadata::default();
        assert!(r.is_ramp("sol ring", &unknown));
        assert!(r.is_ramp("orzhov signet", &unknown));
        assert!(r.is_ramp("talisman of dominance", &unknown));
        assert!(!r.is_ramp("grizzly bears", &unknown));
    }

    #[test]
    fn test_removal_patterns() {
        let r = rules();
        assert!(r.is_removal(&CardMetadata::new().with_oracle_text("Destroy target creature.")));
        assert!(r.is_removal(&CardMetadata::new().with_oracle_text("Counter target spell.")));
        assert!(r.is_removal(
            &CardMetadata::new().with_oracle_text("Lightning Bolt deals 3 damage to any target.")
        ));
        assert!(!r.is_removal(&CardMetadata::new().with_oracle_text("Draw two cards.")));
    }

    #[test]
    fn test_wipe_patterns_and_name_fallback() {
        let r = rules();
        assert!(r.is_wipe(
            "day of judgment",
            &CardMetadata::new().with_oracle_text("Destroy all creatures.")
        ));
        assert!(r.is_wipe("damnation", &CardMetadata::default()));
        assert!(!r.is_wipe("giant growth", &CardMetadata::default()));
    }

    #[parameterized(
        zero = { 0.0, 0 },
        one = { 1.0, 0 },
        two = { 2.0, 1 },
        three = { 3.0, 2 },
        four = { 4.0, 3 },
        five = { 5.0, 4 },
        eleven = { 11.0, 4 },
    )]
    fn test_curve_buckets(mana_value: f64, bucket: usize) {
        assert_eq!(TallyRules::curve_bucket(mana_value), bucket);
    }

    #[test]
    fn test_quantity_additivity() {
        let mut aggregated = BTreeMap::new();
        aggregated.insert("forest".to_string(), 33u32);

        let mut metadata = HashMap::new();
        metadata.insert(
            "forest".to_string(),
            CardMetadata::new().with_type_line("Basic Land — Forest"),
        );

        let tally = tally_deck(&aggregated, &metadata, &rules());
        assert_eq!(tally.lands, 33);
    }

    #[test]
    fn test_card_can_match_multiple_categories() {
        let mut aggregated = BTreeMap::new();
        aggregated.insert("example".to_string(), 1u32);

        let mut metadata = HashMap::new();
        metadata.insert(
            "example".to_string(),
            CardMetadata::new()
                .with_oracle_text("Destroy target creature. Draw a card.")
                .with_mana_value(3.0),
        );

        let tally = tally_deck(&aggregated, &metadata, &rules());
        assert_eq!(tally.removal, 1);
        assert_eq!(tally.draw, 1);
        assert_eq!(tally.curve[2], 1);
    }

    #[test]
    fn test_mana_producing_land_is_not_ramp() {
        let mut aggregated = BTreeMap::new();
        aggregated.insert("command tower".to_string(), 1u32);

        let mut metadata = HashMap::new();
        metadata.insert(
            "command tower".to_string(),
            CardMetadata::new()
                .with_type_line("Land")
                .with_oracle_text("{T}: Add one mana of any color."),
        );

        let tally = tally_deck(&aggregated, &metadata, &rules());
        assert_eq!(tally.lands, 1);
        assert_eq!(tally.ramp, 0);
    }

    #[test]
    fn test_unknown_metadata_matches_nothing() {
        let mut aggregated = BTreeMap::new();
        aggregated.insert("some mystery card".to_string(), 4u32);

        let tally = tally_deck(&aggregated, &HashMap::new(), &rules());
        assert_eq!(tally, DeckTally::default());
    }

    #[test]
    fn test_curve_total_bounded_by_card_count() {
        let mut aggregated = BTreeMap::new();
        aggregated.insert("known".to_string(), 2u32);
        aggregated.insert("unknown".to_string(), 3u32);

        let mut metadata = HashMap::new();
        metadata.insert(
            "known".to_string(),
            CardMetadata::new().with_mana_value(2.0),
        );

        let tally = tally_deck(&aggregated, &metadata, &rules());
        let card_count: u32 = aggregated.values().sum();
        assert_eq!(tally.curve_total(), 2);
        assert!(tally.curve_total() <= card_count);
    }
}
