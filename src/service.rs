//! Analysis service orchestration
//!
//! `AnalysisService` is the high-level entry point: it owns the metadata
//! source, the paste-summary cache, the layer store and the compiled rule
//! sets, and wires the pipeline together:
//!
//! 1. Parse and canonicalize the pasted decklist
//! 2. Hash it and probe the summary cache
//! 3. On a miss, fetch metadata in one batched call
//! 4. Tally, infer warnings, detect modules, build the summary
//! 5. Fill the cache and return
//!
//! Prompt composition reuses the same metadata fetch so a request costs at
//! most one lookup round-trip.

use anyhow::Result;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::analysis::{
    deck_colors, infer_warnings, tally_deck, DeckContextSummary, TallyRules,
};
use crate::cache::SummaryCache;
use crate::card::MetadataSource;
use crate::config::EngineConfig;
use crate::deck::{aggregate, canonicalize, hash_aggregated, parse_decklist};
use crate::detection::{ModuleDetector, ModuleKind};
use crate::prompt::{ComposedPrompt, DeckSnapshot, LayerStore, PromptComposer};
use crate::types::Format;

/// Names to fetch metadata for: the aggregated deck plus the commander,
/// who sits in the command zone and is usually not a deck line.
fn fetch_names(aggregated: &BTreeMap<String, u32>, commander: Option<&str>) -> Vec<String> {
    let mut names: Vec<String> = aggregated.keys().cloned().collect();
    if let Some(name) = commander {
        if !aggregated.contains_key(name) {
            names.push(name.to_string());
        }
    }
    names
}

/// High-level deck analysis engine.
pub struct AnalysisService<M: MetadataSource, L: LayerStore> {
    metadata: M,
    cache: SummaryCache,
    composer: PromptComposer<L>,
    detector: ModuleDetector,
    rules: TallyRules,
    config: EngineConfig,
}

impl<M: MetadataSource, L: LayerStore> AnalysisService<M, L> {
    pub fn new(config: EngineConfig, metadata: M, layers: L) -> Self {
        Self {
            metadata,
            cache: SummaryCache::new(config.cache.clone()),
            composer: PromptComposer::new(layers, ModuleDetector::new(config.thresholds.clone())),
            detector: ModuleDetector::new(config.thresholds.clone()),
            rules: TallyRules::new(),
            config,
        }
    }

    /// Builds (or fetches from cache) the context summary for a decklist.
    ///
    /// Deterministic for a fixed metadata snapshot: the same paste always
    /// yields a bit-identical summary.
    pub fn summarize(
        &self,
        raw_text: &str,
        format: Format,
        commander: Option<&str>,
    ) -> Result<DeckContextSummary> {
        let started = Instant::now();
        let entries = parse_decklist(raw_text);
        let aggregated = aggregate(&entries);
        let commander = commander
            .map(canonicalize)
            .filter(|name| !name.is_empty());
        let deck_hash = hash_aggregated(&aggregated);

        if let Some(cached) = self.cache.get(&deck_hash) {
            debug!(%deck_hash, "summary cache hit");
            return Ok(cached);
        }

        let names: Vec<String> = aggregated.keys().cloned().collect();
        let metadata = self
            .metadata
            .fetch(&fetch_names(&aggregated, commander.as_deref()))?;

        let tally = tally_deck(&aggregated, &metadata, &self.rules);
        let card_count: u32 = aggregated.values().sum();
        let warning_flags = infer_warnings(format, card_count, &tally, &self.config.targets);
        let flags = self
            .detector
            .detect(&aggregated, &metadata, commander.as_deref());
        let archetype_tags = flags
            .attached()
            .iter()
            .map(|module| module.id().to_string())
            .collect();

        let summary = DeckContextSummary {
            deck_hash: deck_hash.clone(),
            format,
            commander,
            colors: deck_colors(&aggregated, &metadata),
            land_count: tally.lands,
            curve_histogram: tally.curve,
            ramp: tally.ramp,
            removal: tally.removal,
            draw: tally.draw,
            board_wipes: tally.wipes,
            archetype_tags,
            warning_flags,
            card_names: names,
            card_count,
        };

        self.cache.set(deck_hash.clone(), summary.clone());
        info!(
            %deck_hash,
            card_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built deck context summary"
        );
        Ok(summary)
    }

    /// Composes the layered system prompt for a generation call.
    ///
    /// `raw_deck` is the pasted decklist, if the caller has one. A failed
    /// metadata fetch downgrades to base + format layers rather than
    /// failing the request; module detection needs metadata to mean
    /// anything.
    pub fn compose_system_prompt(
        &self,
        format_key: &str,
        raw_deck: Option<&str>,
        commander: Option<&str>,
    ) -> ComposedPrompt {
        let commander = commander.map(canonicalize).filter(|name| !name.is_empty());
        let snapshot = raw_deck.and_then(|text| {
            let aggregated = aggregate(&parse_decklist(text));
            if aggregated.is_empty() {
                return None;
            }
            match self
                .metadata
                .fetch(&fetch_names(&aggregated, commander.as_deref()))
            {
                Ok(metadata) => Some(DeckSnapshot {
                    cards: aggregated,
                    metadata,
                    commander: commander.clone(),
                }),
                Err(error) => {
                    warn!(%error, "metadata fetch failed; composing without module layers");
                    None
                }
            }
        });

        self.composer
            .compose_system_prompt(format_key, snapshot.as_ref())
    }

    /// Modules the detector would attach for a decklist, without composing.
    pub fn detect_modules(&self, raw_deck: &str, commander: Option<&str>) -> Result<Vec<ModuleKind>> {
        let aggregated = aggregate(&parse_decklist(raw_deck));
        let commander = commander.map(canonicalize).filter(|name| !name.is_empty());
        let metadata = self
            .metadata
            .fetch(&fetch_names(&aggregated, commander.as_deref()))?;
        Ok(self
            .detector
            .detect(&aggregated, &metadata, commander.as_deref())
            .attached())
    }

    pub fn cache(&self) -> &SummaryCache {
        &self.cache
    }
}
