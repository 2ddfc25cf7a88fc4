//! Stable content hashing for decklists
//!
//! The hash keys the paste-summary cache, so it must be a pure function of
//! the deck's aggregated contents: shuffling lines, splitting a `4x` line
//! into four `1x` lines, or re-pasting from a different tool must all
//! produce the same digest.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use super::parser::{aggregate, parse_decklist};

/// Sentinel hash for decklists with no parseable entries. A fixed token
/// rather than a digest of the empty string, so it can never collide with
/// a real deck and is recognizable in logs.
pub const EMPTY_DECK_HASH: &str = "empty-decklist";

/// Hashes a raw decklist: parse, canonicalize, aggregate, then digest.
pub fn deck_hash(text: &str) -> String {
    let entries = parse_decklist(text);
    hash_aggregated(&aggregate(&entries))
}

/// Hashes an already-aggregated decklist.
///
/// The `BTreeMap` keeps pairs sorted lexicographically by canonical name;
/// rendering them as newline-joined `"quantity name"` lines gives a stable
/// preimage across calls and processes.
pub fn hash_aggregated(aggregated: &BTreeMap<String, u32>) -> String {
    if aggregated.is_empty() {
        return EMPTY_DECK_HASH.to_string();
    }

    let rendered = aggregated
        .iter()
        .map(|(name, quantity)| format!("{} {}", quantity, name))
        .collect::<Vec<_>>()
        .join("\n");

    let digest = Sha256::digest(rendered.as_bytes());
    hex::encode(digest)
}
