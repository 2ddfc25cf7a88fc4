//! Gameplay-module detection via keyword scoring

pub mod detector;
pub mod patterns;

pub use detector::{DetectorThresholds, ModuleDetector, ModuleFlags, ModuleKind};
