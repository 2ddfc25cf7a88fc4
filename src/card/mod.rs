//! Card metadata types and the external lookup boundary
//!
//! The engine never owns a card database. It asks a [`MetadataSource`] for
//! whatever it has cached, in one batched call per request, and treats
//! missing names as "unknown card" rather than an error. Every classifier
//! downstream is written so that an absent field simply matches nothing.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partial card metadata as served by the external lookup.
///
/// All fields are optional: the lookup is cache-only and may know a card's
/// type line but not its oracle text, or nothing at all. `color_identity`
/// is a subset of the letters `WUBRG`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardMetadata {
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub mana_value: Option<f64>,
    pub color_identity: Option<String>,
}

impl CardMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = Some(type_line.into());
        self
    }

    pub fn with_oracle_text(mut self, oracle_text: impl Into<String>) -> Self {
        self.oracle_text = Some(oracle_text.into());
        self
    }

    pub fn with_mana_value(mut self, mana_value: f64) -> Self {
        self.mana_value = Some(mana_value);
        self
    }

    pub fn with_color_identity(mut self, colors: impl Into<String>) -> Self {
        self.color_identity = Some(colors.into());
        self
    }

    /// Lowercased type line, or empty when unknown.
    pub fn type_line_lower(&self) -> String {
        self.type_line
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }

    /// Lowercased oracle text, or empty when unknown.
    pub fn oracle_text_lower(&self) -> String {
        self.oracle_text
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}

/// Batched lookup boundary to the external card-metadata cache.
///
/// Implementations return a partial map keyed by canonical name. Missing
/// keys mean "unknown", never an error; `Err` is reserved for transport
/// failures in remote implementations.
pub trait MetadataSource {
    fn fetch(&self, names: &[String]) -> Result<HashMap<String, CardMetadata>>;
}

/// In-memory metadata source backed by a fixed snapshot.
///
/// Used by tests and by embedders that already hold a local card cache.
#[derive(Debug, Default, Clone)]
pub struct StaticMetadataSource {
    cards: HashMap<String, CardMetadata>,
}

impl StaticMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card keyed by its canonical name.
    pub fn with_card(mut self, canonical_name: impl Into<String>, metadata: CardMetadata) -> Self {
        self.cards.insert(canonical_name.into(), metadata);
        self
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl MetadataSource for StaticMetadataSource {
    fn fetch(&self, names: &[String]) -> Result<HashMap<String, CardMetadata>> {
        Ok(names
            .iter()
            .filter_map(|name| {
                self.cards
                    .get(name)
                    .map(|metadata| (name.clone(), metadata.clone()))
            })
            .collect())
    }
}
