//! Layered system-prompt composition
//!
//! Composition order is load-bearing for downstream generation quality:
//! base layer first, then the format layer, then module layers in the
//! declared [`ModuleKind::ALL`] order. Missing layers are skipped, never
//! errors; an empty store still produces the built-in base text.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::layers::{LayerKey, LayerStore, DEFAULT_BASE_LAYER};
use crate::card::CardMetadata;
use crate::detection::{ModuleDetector, ModuleKind};
use crate::types::Format;

/// Deck material the composer needs to evaluate module layers.
#[derive(Debug, Clone, Default)]
pub struct DeckSnapshot {
    /// Aggregated decklist keyed by canonical name.
    pub cards: BTreeMap<String, u32>,
    /// Partial metadata for the cards, keyed by canonical name.
    pub metadata: HashMap<String, CardMetadata>,
    /// Canonical commander name, if any.
    pub commander: Option<String>,
}

/// Result of prompt composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedPrompt {
    pub text: String,
    pub modules_attached: Vec<ModuleKind>,
}

/// Stacks prompt layers for a format and an optional deck.
pub struct PromptComposer<S: LayerStore> {
    store: S,
    detector: ModuleDetector,
}

impl<S: LayerStore> PromptComposer<S> {
    pub fn new(store: S, detector: ModuleDetector) -> Self {
        Self { store, detector }
    }

    /// Composes the system prompt for a downstream generation call.
    ///
    /// `format_key` is resolved leniently: unknown keys fall back to
    /// Commander. Module layers are only evaluated when a snapshot with at
    /// least one card is supplied; otherwise the result is base + format
    /// with no modules attached.
    pub fn compose_system_prompt(
        &self,
        format_key: &str,
        deck: Option<&DeckSnapshot>,
    ) -> ComposedPrompt {
        let format = Format::from_key(format_key);
        let mut sections: Vec<String> = Vec::new();

        sections.push(
            self.store
                .layer(&LayerKey::Base)
                .unwrap_or_else(|| DEFAULT_BASE_LAYER.to_string()),
        );

        if let Some(format_layer) = self.store.layer(&LayerKey::Format(format)) {
            sections.push(format_layer);
        }

        let mut modules_attached = Vec::new();
        if let Some(deck) = deck.filter(|d| !d.cards.is_empty()) {
            let flags = self
                .detector
                .detect(&deck.cards, &deck.metadata, deck.commander.as_deref());
            for module in flags.attached() {
                modules_attached.push(module);
                if let Some(module_layer) = self.store.layer(&LayerKey::Module(module)) {
                    sections.push(module_layer);
                }
            }
        }

        debug!(
            format = %format,
            modules = modules_attached.len(),
            layers = sections.len(),
            "composed system prompt"
        );

        ComposedPrompt {
            text: sections.join("\n\n"),
            modules_attached,
        }
    }
}
