//! Shared key types for formats, archetypes and advice categories
//!
//! These are deliberately closed sets. Callers integrate through `FromStr`
//! (which rejects unknown identifiers) so a typo cannot silently resolve to
//! "no heuristic applies". The prompt composer is the one lenient consumer:
//! it uses [`Format::from_key`], which falls back to Commander for unknown
//! keys instead of failing the whole request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a caller passes an identifier outside the closed sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown format: {0}. Valid options: commander, modern, standard, pioneer, legacy, pauper")]
    UnknownFormat(String),

    #[error("Unknown archetype: {0}. Valid options: aggro, midrange, control, combo")]
    UnknownArchetype(String),

    #[error("Unknown advice category: {0}. Valid options: lands, ramp, draw, removal")]
    UnknownCategory(String),
}

/// Play formats the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Commander,
    Modern,
    Standard,
    Pioneer,
    Legacy,
    Pauper,
}

impl Format {
    /// Singleton formats play ~99-card decks and get commander-specific
    /// land/ramp expectations.
    pub fn is_singleton(&self) -> bool {
        matches!(self, Format::Commander)
    }

    /// Lenient resolution used by the prompt composer: unknown keys fall
    /// back to Commander rather than erroring, so a stale client never
    /// loses its base instructions.
    pub fn from_key(key: &str) -> Format {
        Format::from_str(key).unwrap_or(Format::Commander)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Commander => "commander",
            Format::Modern => "modern",
            Format::Standard => "standard",
            Format::Pioneer => "pioneer",
            Format::Legacy => "legacy",
            Format::Pauper => "pauper",
        }
    }
}

impl FromStr for Format {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "commander" | "edh" => Ok(Format::Commander),
            "modern" => Ok(Format::Modern),
            "standard" => Ok(Format::Standard),
            "pioneer" => Ok(Format::Pioneer),
            "legacy" => Ok(Format::Legacy),
            "pauper" => Ok(Format::Pauper),
            other => Err(KeyError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deck archetypes used to key heuristic ranges in non-singleton formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Aggro,
    Midrange,
    Control,
    Combo,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Aggro => "aggro",
            Archetype::Midrange => "midrange",
            Archetype::Control => "control",
            Archetype::Combo => "combo",
        }
    }
}

impl FromStr for Archetype {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aggro" => Ok(Archetype::Aggro),
            "midrange" => Ok(Archetype::Midrange),
            "control" => Ok(Archetype::Control),
            "combo" => Ok(Archetype::Combo),
            other => Err(KeyError::UnknownArchetype(other.to_string())),
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric-advice categories the heuristic validator can grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lands,
    Ramp,
    Draw,
    Removal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lands => "lands",
            Category::Ramp => "ramp",
            Category::Draw => "draw",
            Category::Removal => "removal",
        }
    }
}

impl FromStr for Category {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lands" | "land" => Ok(Category::Lands),
            "ramp" => Ok(Category::Ramp),
            "draw" => Ok(Category::Draw),
            "removal" => Ok(Category::Removal),
            other => Err(KeyError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
