//! Layered instruction-document assembly for the generation call

pub mod composer;
pub mod layers;

pub use composer::{ComposedPrompt, DeckSnapshot, PromptComposer};
pub use layers::{InMemoryLayerStore, LayerKey, LayerStore, DEFAULT_BASE_LAYER};
