//! Numeric-advice extraction and range validation
//!
//! This path is independent of the summary pipeline: it consumes generated
//! advice text plus a target format/archetype and grades every number it
//! can find against empirically-derived ranges.

pub mod extract;
pub mod ranges;
pub mod validator;

pub use extract::extract_numeric_recommendations;
pub use ranges::{lookup_range, HeuristicRange};
pub use validator::{check_strategic_advice, validate_heuristic, Severity, ValidationResult};
