//! Deck-construction warning flags
//!
//! Each check is independent; any subset may fire. Flags are advisory
//! labels for the prompt and the UI, not legality judgments.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tally::DeckTally;
use crate::types::Format;

/// Advisory flags attached to a deck summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningFlag {
    DeckTooSmall,
    ManaLow,
    ManaHigh,
    RampLow,
    DrawLow,
    RemovalLow,
}

impl fmt::Display for WarningFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WarningFlag::DeckTooSmall => "deck_too_small",
            WarningFlag::ManaLow => "mana_low",
            WarningFlag::ManaHigh => "mana_high",
            WarningFlag::RampLow => "ramp_low",
            WarningFlag::DrawLow => "draw_low",
            WarningFlag::RemovalLow => "removal_low",
        };
        f.write_str(s)
    }
}

/// Per-format construction targets driving the warning checks.
#[derive(Debug, Clone, PartialEq)]
pub struct WarningTargets {
    /// Minimum deck size for singleton formats.
    pub singleton_deck_size: u32,
    /// Ramp pieces expected in a full singleton deck.
    pub singleton_ramp_target: u32,
    /// Draw pieces below which `draw_low` fires.
    pub draw_floor: u32,
    /// Removal pieces below which `removal_low` fires.
    pub removal_floor: u32,
    /// Land ratio below which `mana_low` fires.
    pub mana_low_ratio: f64,
    /// Land ratio above which `mana_high` fires.
    pub mana_high_ratio: f64,
}

impl Default for WarningTargets {
    fn default() -> Self {
        Self {
            singleton_deck_size: 98,
            singleton_ramp_target: 8,
            draw_floor: 6,
            removal_floor: 5,
            mana_low_ratio: 0.30,
            mana_high_ratio: 0.45,
        }
    }
}

/// Runs every warning check against the tallies for a deck.
///
/// Flags are returned in a fixed declared order so summaries are
/// bit-identical across runs.
pub fn infer_warnings(
    format: Format,
    card_count: u32,
    tally: &DeckTally,
    targets: &WarningTargets,
) -> Vec<WarningFlag> {
    let mut flags = Vec::new();
    let land_ratio = if card_count > 0 {
        f64::from(tally.lands) / f64::from(card_count)
    } else {
        0.0
    };

    if format.is_singleton() && card_count < targets.singleton_deck_size {
        flags.push(WarningFlag::DeckTooSmall);
    }
    if card_count > 0 && land_ratio < targets.mana_low_ratio {
        flags.push(WarningFlag::ManaLow);
    }
    if tally.lands > 0 && land_ratio > targets.mana_high_ratio {
        flags.push(WarningFlag::ManaHigh);
    }
    if format.is_singleton() && tally.ramp < targets.singleton_ramp_target {
        flags.push(WarningFlag::RampLow);
    }
    if tally.draw < targets.draw_floor {
        flags.push(WarningFlag::DrawLow);
    }
    if tally.removal < targets.removal_floor {
        flags.push(WarningFlag::RemovalLow);
    }

    flags
}
