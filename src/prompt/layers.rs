//! Prompt layers and the layer store boundary
//!
//! A layer is one instruction-text block. The composer stacks them in a
//! fixed order: base, format, then modules. Layer bodies live behind the
//! [`LayerStore`] trait so embedders can serve them from a database or
//! admin tool; the in-memory store ships with workable defaults, and the
//! base layer additionally has a built-in fallback so composition can
//! never come back empty.

use std::collections::HashMap;

use crate::detection::ModuleKind;
use crate::types::Format;

/// Built-in base layer used when even the store's base entry is missing.
pub const DEFAULT_BASE_LAYER: &str = "You are an expert trading-card deck-building assistant. \
Give concrete, actionable advice grounded in the decklist you are shown. \
Recommend specific card counts for lands, ramp, card draw and interaction, \
and explain tradeoffs briefly. Never invent cards that do not exist, and \
never comment on tournament legality.";

/// Identifies one layer in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKey {
    Base,
    Format(Format),
    Module(ModuleKind),
}

impl LayerKey {
    /// Stable storage key, e.g. `base`, `format:commander`, `module:landfall`.
    pub fn storage_key(&self) -> String {
        match self {
            LayerKey::Base => "base".to_string(),
            LayerKey::Format(format) => format!("format:{}", format.as_str()),
            LayerKey::Module(module) => format!("module:{}", module.id()),
        }
    }
}

/// Lookup boundary for layer bodies. Not-found is non-fatal everywhere.
pub trait LayerStore {
    fn layer(&self, key: &LayerKey) -> Option<String>;
}

/// In-memory layer store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLayerStore {
    layers: HashMap<String, String>,
}

impl InMemoryLayerStore {
    /// Empty store: composition falls back to the built-in base layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the stock base, format and module layers.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.insert(LayerKey::Base, DEFAULT_BASE_LAYER);
        store.insert(
            LayerKey::Format(Format::Commander),
            "This is a Commander (EDH) deck: 100 cards, singleton, multiplayer. \
             Weigh consistency against the social dynamics of a four-player table. \
             Typical manabases run 34-38 lands with 8-12 ramp pieces.",
        );
        store.insert(
            LayerKey::Format(Format::Modern),
            "This is a Modern deck: 60-card minimum, four-copy maximum, fast \
             two-player metagame. Prioritize mana efficiency and sideboard plans.",
        );
        store.insert(
            LayerKey::Format(Format::Standard),
            "This is a Standard deck built from the current rotation. Prefer \
             recently printed answers and keep the curve low.",
        );
        store.insert(
            LayerKey::Format(Format::Pioneer),
            "This is a Pioneer deck. The card pool is deep but slower than \
             Modern; value resilient threats over raw speed.",
        );
        store.insert(
            LayerKey::Format(Format::Legacy),
            "This is a Legacy deck. Expect free interaction and fast mana; \
             every suggestion must respect a turn-one-relevant metagame.",
        );
        store.insert(
            LayerKey::Format(Format::Pauper),
            "This is a Pauper deck: commons only. Recommend only cards printed \
             at common rarity.",
        );
        store.insert(
            LayerKey::Module(ModuleKind::Cascade),
            "The deck leans on cascade triggers. Advise on mana-value \
             sculpting so cascades hit intended payoffs, and flag low-value \
             cascade hits in the list.",
        );
        store.insert(
            LayerKey::Module(ModuleKind::Aristocrats),
            "The deck is an aristocrats build: sacrifice outlets plus \
             death-trigger payoffs. Advise on the outlet-to-fodder ratio and \
             on protecting key payoff pieces.",
        );
        store.insert(
            LayerKey::Module(ModuleKind::Landfall),
            "The deck wants extra land drops and landfall payoffs. Treat \
             lands as spells when discussing counts, and suggest ways to \
             keep land drops flowing in the late game.",
        );
        store.insert(
            LayerKey::Module(ModuleKind::Spellslinger),
            "The deck is instant/sorcery dense. Advise on the cantrip count, \
             spell-copy payoffs, and how many creatures the list can afford.",
        );
        store.insert(
            LayerKey::Module(ModuleKind::Graveyard),
            "The graveyard is a resource here. Advise on self-mill density, \
             recursion redundancy, and resilience to graveyard hate.",
        );
        store
    }

    pub fn insert(&mut self, key: LayerKey, body: impl Into<String>) {
        self.layers.insert(key.storage_key(), body.into());
    }

    pub fn remove(&mut self, key: &LayerKey) {
        self.layers.remove(&key.storage_key());
    }
}

impl LayerStore for InMemoryLayerStore {
    fn layer(&self, key: &LayerKey) -> Option<String> {
        self.layers.get(&key.storage_key()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(LayerKey::Base.storage_key(), "base");
        assert_eq!(
            LayerKey::Format(Format::Commander).storage_key(),
            "format:commander"
        );
        assert_eq!(
            LayerKey::Module(ModuleKind::Landfall).storage_key(),
            "module:landfall"
        );
    }

    #[test]
    fn test_defaults_cover_all_formats_and_modules() {
        let store = InMemoryLayerStore::with_defaults();
        assert!(store.layer(&LayerKey::Base).is_some());
        for format in [
            Format::Commander,
            Format::Modern,
            Format::Standard,
            Format::Pioneer,
            Format::Legacy,
            Format::Pauper,
        ] {
            assert!(store.layer(&LayerKey::Format(format)).is_some());
        }
        for module in ModuleKind::ALL {
            assert!(store.layer(&LayerKey::Module(module)).is_some());
        }
    }

    #[test]
    fn test_empty_store_misses() {
        let store = InMemoryLayerStore::new();
        assert!(store.layer(&LayerKey::Base).is_none());
    }
}
