//! deckwise - deterministic deck analysis and AI context assembly
//!
//! This library powers the analysis side of a trading-card deck-building
//! tool. It turns free-text decklists into stable, cacheable context
//! summaries, detects gameplay patterns worth telling a language model
//! about, assembles the layered system prompt for the downstream
//! generation call, and sanity-checks the numbers that come back.
//!
//! # Core Concepts
//!
//! - **Canonical names**: every raw card name normalizes to one identity
//!   string, so `"SOL RING"` and `"sol ring"` aggregate together
//! - **Deck hash**: a content hash of the canonicalized, aggregated
//!   decklist - invariant under line reordering and duplicate splitting,
//!   and the key for the paste-summary cache
//! - **Modules**: deterministic gameplay-pattern classifications (cascade,
//!   aristocrats, landfall, spellslinger, graveyard) detected by keyword
//!   scoring over cached card metadata
//! - **Layers**: instruction-text blocks composed in a fixed order (base,
//!   format, modules) into the generation system prompt
//! - **Heuristic validation**: numeric advice extracted from generated
//!   prose and graded against per-format expected ranges
//!
//! # Example
//!
//! ```
//! use deckwise::{AnalysisService, EngineConfig, Format};
//! use deckwise::card::{CardMetadata, StaticMetadataSource};
//! use deckwise::prompt::InMemoryLayerStore;
//!
//! let metadata = StaticMetadataSource::new().with_card(
//!     "forest",
//!     CardMetadata::new().with_type_line("Basic Land — Forest"),
//! );
//! let service = AnalysisService::new(
//!     EngineConfig::default(),
//!     metadata,
//!     InMemoryLayerStore::with_defaults(),
//! );
//!
//! let summary = service
//!     .summarize("40 Forest", Format::Commander, None)
//!     .unwrap();
//! assert_eq!(summary.land_count, 40);
//! ```
//!
//! # Project Structure
//!
//! - [`deck`]: decklist parsing, canonicalization and hashing
//! - [`analysis`]: strategic tallies, warning flags and the summary type
//! - [`cache`]: bounded LRU+TTL paste-summary cache
//! - [`detection`]: gameplay-module detection
//! - [`prompt`]: layered system-prompt composition
//! - [`heuristics`]: numeric-advice extraction and range validation
//! - [`card`]: card metadata and the external lookup boundary

pub mod analysis;
pub mod cache;
pub mod card;
pub mod config;
pub mod deck;
pub mod detection;
pub mod heuristics;
pub mod prompt;
pub mod service;
pub mod types;
pub mod util;

pub use analysis::{DeckContextSummary, DeckTally, WarningFlag};
pub use cache::{CacheConfig, SummaryCache};
pub use card::{CardMetadata, MetadataSource};
pub use config::{ConfigError, EngineConfig};
pub use deck::{canonicalize, deck_hash, EMPTY_DECK_HASH};
pub use detection::{ModuleDetector, ModuleFlags, ModuleKind};
pub use heuristics::{
    check_strategic_advice, extract_numeric_recommendations, validate_heuristic, Severity,
    ValidationResult,
};
pub use prompt::{ComposedPrompt, PromptComposer};
pub use service::AnalysisService;
pub use types::{Archetype, Category, Format, KeyError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
