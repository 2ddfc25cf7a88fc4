//! Decklist parsing, name canonicalization and stable deck identity
//!
//! Raw pasted decklists flow through this module in three steps: tolerant
//! line parsing ([`parser`]), canonical name normalization ([`canonical`])
//! and order-independent content hashing ([`hash`]). The hash is the key
//! for the paste-summary cache, so everything here must be deterministic.

pub mod canonical;
pub mod hash;
pub mod parser;

pub use canonical::canonicalize;
pub use hash::{deck_hash, hash_aggregated, EMPTY_DECK_HASH};
pub use parser::{aggregate, parse_decklist, DecklistEntry};
