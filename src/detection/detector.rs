//! Threshold-based gameplay module detection
//!
//! A single pass over the deck's unique cards accumulates keyword scores,
//! then thresholds turn scores into boolean module flags. Detection is
//! deterministic: the attached-module list always comes out in the
//! declared [`ModuleKind::ALL`] order, never in discovery order.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::patterns;
use crate::card::CardMetadata;

/// Gameplay modules the prompt composer can attach layers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Cascade,
    Aristocrats,
    Landfall,
    Spellslinger,
    Graveyard,
}

impl ModuleKind {
    /// Declared attachment order. Load-bearing for prompt composition;
    /// never reorder.
    pub const ALL: [ModuleKind; 5] = [
        ModuleKind::Cascade,
        ModuleKind::Aristocrats,
        ModuleKind::Landfall,
        ModuleKind::Spellslinger,
        ModuleKind::Graveyard,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ModuleKind::Cascade => "cascade",
            ModuleKind::Aristocrats => "aristocrats",
            ModuleKind::Landfall => "landfall",
            ModuleKind::Spellslinger => "spellslinger",
            ModuleKind::Graveyard => "graveyard",
        }
    }
}

/// Boolean module flags for one detection call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleFlags {
    pub cascade: bool,
    pub aristocrats: bool,
    pub landfall: bool,
    pub spellslinger: bool,
    pub graveyard: bool,
}

impl ModuleFlags {
    pub fn is_set(&self, kind: ModuleKind) -> bool {
        match kind {
            ModuleKind::Cascade => self.cascade,
            ModuleKind::Aristocrats => self.aristocrats,
            ModuleKind::Landfall => self.landfall,
            ModuleKind::Spellslinger => self.spellslinger,
            ModuleKind::Graveyard => self.graveyard,
        }
    }

    /// Set flags in declared order.
    pub fn attached(&self) -> Vec<ModuleKind> {
        ModuleKind::ALL
            .into_iter()
            .filter(|kind| self.is_set(*kind))
            .collect()
    }
}

/// Score thresholds for turning keyword counts into module flags.
///
/// The aristocrats weighting (repeatable outlet +2, cost-only outlet +1)
/// and its threshold are tuning constants, kept as configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorThresholds {
    pub cascade: u32,
    pub spell_count: u32,
    pub landfall_payoffs: u32,
    pub extra_land_drops: u32,
    pub sac_outlet_score: u32,
    pub death_payoffs: u32,
    pub recursion: u32,
}

impl Default for DetectorThresholds {
    fn default() -> Self {
        Self {
            cascade: 5,
            spell_count: 18,
            landfall_payoffs: 3,
            extra_land_drops: 3,
            sac_outlet_score: 3,
            death_payoffs: 3,
            recursion: 6,
        }
    }
}

/// Raw counters from the single detection pass.
#[derive(Debug, Default)]
struct Scores {
    cascade: u32,
    instants_sorceries: u32,
    storm_seen: bool,
    landfall_payoffs: u32,
    extra_land_drops: u32,
    sac_outlet_score: u32,
    death_payoffs: u32,
    recursion: u32,
}

/// Compiled module detector. Build once, reuse across requests.
#[derive(Debug)]
pub struct ModuleDetector {
    thresholds: DetectorThresholds,
    landfall: Regex,
    extra_land: Regex,
    sac_outlet: Regex,
    sac_cost: Regex,
    death_trigger: Regex,
    recursion: Regex,
}

impl Default for ModuleDetector {
    fn default() -> Self {
        Self::new(DetectorThresholds::default())
    }
}

impl ModuleDetector {
    pub fn new(thresholds: DetectorThresholds) -> Self {
        Self {
            thresholds,
            landfall: Regex::new(patterns::LANDFALL_PATTERN).expect("valid regex"),
            extra_land: Regex::new(patterns::EXTRA_LAND_PATTERN).expect("valid regex"),
            sac_outlet: Regex::new(patterns::SAC_OUTLET_PATTERN).expect("valid regex"),
            sac_cost: Regex::new(patterns::SAC_COST_PATTERN).expect("valid regex"),
            death_trigger: Regex::new(patterns::DEATH_TRIGGER_PATTERN).expect("valid regex"),
            recursion: Regex::new(patterns::RECURSION_PATTERN).expect("valid regex"),
        }
    }

    /// Detects modules over the deck's unique cards.
    ///
    /// `aggregated` is keyed by canonical name; quantities are ignored here
    /// because module signals count distinct cards, not copies.
    /// `commander` is a canonical name and may override cascade and
    /// graveyard regardless of the counts.
    pub fn detect(
        &self,
        aggregated: &BTreeMap<String, u32>,
        metadata: &HashMap<String, CardMetadata>,
        commander: Option<&str>,
    ) -> ModuleFlags {
        let mut scores = Scores::default();

        for name in aggregated.keys() {
            let Some(card) = metadata.get(name) else {
                continue;
            };
            self.score_card(card, &mut scores);
        }

        if let Some(commander_meta) = commander.and_then(|name| metadata.get(name)) {
            if commander_meta
                .oracle_text_lower()
                .contains(patterns::CASCADE_KEYWORD)
            {
                scores.cascade = scores.cascade.max(self.thresholds.cascade);
            }
        }

        let mut flags = ModuleFlags {
            cascade: scores.cascade >= self.thresholds.cascade,
            aristocrats: scores.sac_outlet_score >= self.thresholds.sac_outlet_score
                && scores.death_payoffs >= self.thresholds.death_payoffs,
            landfall: scores.landfall_payoffs >= self.thresholds.landfall_payoffs
                || scores.extra_land_drops >= self.thresholds.extra_land_drops,
            spellslinger: scores.instants_sorceries >= self.thresholds.spell_count
                || scores.storm_seen,
            graveyard: scores.recursion >= self.thresholds.recursion,
        };

        if let Some(commander) = commander {
            if patterns::GRAVEYARD_COMMANDERS.contains(&commander) {
                flags.graveyard = true;
            }
        }

        debug!(?scores, ?flags, "module detection complete");
        flags
    }

    fn score_card(&self, card: &CardMetadata, scores: &mut Scores) {
        let oracle = card.oracle_text_lower();
        let type_line = card.type_line_lower();

        if oracle.contains(patterns::CASCADE_KEYWORD) {
            scores.cascade += 1;
        }
        if type_line.contains("instant") || type_line.contains("sorcery") {
            scores.instants_sorceries += 1;
        }
        if patterns::STORM_KEYWORDS.iter().any(|kw| oracle.contains(kw)) {
            scores.storm_seen = true;
        }
        if self.landfall.is_match(&oracle) {
            scores.landfall_payoffs += 1;
        }
        if self.extra_land.is_match(&oracle) {
            scores.extra_land_drops += 1;
        }
        if self.sac_outlet.is_match(&oracle) {
            scores.sac_outlet_score += 2;
        } else if self.sac_cost.is_match(&oracle) {
            scores.sac_outlet_score += 1;
        }
        if self.death_trigger.is_match(&oracle) {
            scores.death_payoffs += 1;
        }
        if self.recursion.is_match(&oracle) {
            scores.recursion += 1;
        }
    }
}
