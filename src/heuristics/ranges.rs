//! Empirically-derived numeric ranges per format, archetype and category
//!
//! The tables are static: Commander ranges are keyed directly by category,
//! other formats by (archetype, category) with a default-archetype
//! fallback. A missing entry means "no opinion" and the validator treats
//! it as acceptable.

use crate::types::{Archetype, Category, Format};

/// Expected band for one numeric recommendation.
///
/// `typical` is the sweet spot, `acceptable` the wider tolerated band,
/// and `min`/`max` are absolute breach points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicRange {
    pub typical: (u32, u32),
    pub acceptable: (u32, u32),
    pub min: Option<u32>,
    pub max: Option<u32>,
}

const fn range(
    typical: (u32, u32),
    acceptable: (u32, u32),
    min: Option<u32>,
    max: Option<u32>,
) -> HeuristicRange {
    HeuristicRange {
        typical,
        acceptable,
        min,
        max,
    }
}

const COMMANDER_LANDS: HeuristicRange = range((34, 38), (32, 40), Some(30), Some(45));
const COMMANDER_RAMP: HeuristicRange = range((8, 12), (6, 15), Some(4), Some(20));
const COMMANDER_DRAW: HeuristicRange = range((8, 12), (6, 15), None, None);
const COMMANDER_REMOVAL: HeuristicRange = range((6, 12), (4, 15), None, None);

const MODERN_LANDS_AGGRO: HeuristicRange = range((18, 22), (16, 24), Some(15), Some(26));
const MODERN_LANDS_MIDRANGE: HeuristicRange = range((24, 26), (23, 27), Some(20), Some(28));
const MODERN_LANDS_CONTROL: HeuristicRange = range((25, 27), (24, 28), Some(22), Some(30));
const MODERN_LANDS_COMBO: HeuristicRange = range((18, 21), (16, 23), Some(14), Some(25));
const MODERN_LANDS_DEFAULT: HeuristicRange = range((22, 26), (20, 28), Some(18), Some(30));

const STANDARD_LANDS_AGGRO: HeuristicRange = range((20, 23), (18, 25), Some(17), Some(27));
const STANDARD_LANDS_DEFAULT: HeuristicRange = range((24, 27), (22, 28), Some(20), Some(30));

const PIONEER_LANDS_DEFAULT: HeuristicRange = range((23, 26), (21, 28), Some(19), Some(30));

const LEGACY_LANDS_COMBO: HeuristicRange = range((14, 18), (12, 20), Some(10), Some(24));
const LEGACY_LANDS_DEFAULT: HeuristicRange = range((18, 22), (16, 24), Some(14), Some(27));

const PAUPER_LANDS_DEFAULT: HeuristicRange = range((22, 24), (20, 26), Some(18), Some(28));

/// Resolves the range for a recommendation.
///
/// Commander resolves directly by category. Other formats resolve by
/// archetype when one is supplied and known, then fall back to the
/// format's default-archetype entry. `None` means no rule exists.
pub fn lookup_range(
    format: Format,
    category: Category,
    archetype: Option<Archetype>,
) -> Option<HeuristicRange> {
    if format.is_singleton() {
        return Some(match category {
            Category::Lands => COMMANDER_LANDS,
            Category::Ramp => COMMANDER_RAMP,
            Category::Draw => COMMANDER_DRAW,
            Category::Removal => COMMANDER_REMOVAL,
        });
    }

    // Sixty-card tables currently only carry land-count opinions.
    if category != Category::Lands {
        return None;
    }

    let by_archetype = match (format, archetype) {
        (Format::Modern, Some(Archetype::Aggro)) => Some(MODERN_LANDS_AGGRO),
        (Format::Modern, Some(Archetype::Midrange)) => Some(MODERN_LANDS_MIDRANGE),
        (Format::Modern, Some(Archetype::Control)) => Some(MODERN_LANDS_CONTROL),
        (Format::Modern, Some(Archetype::Combo)) => Some(MODERN_LANDS_COMBO),
        (Format::Standard, Some(Archetype::Aggro)) => Some(STANDARD_LANDS_AGGRO),
        (Format::Legacy, Some(Archetype::Combo)) => Some(LEGACY_LANDS_COMBO),
        _ => None,
    };

    by_archetype.or(match format {
        Format::Modern => Some(MODERN_LANDS_DEFAULT),
        Format::Standard => Some(STANDARD_LANDS_DEFAULT),
        Format::Pioneer => Some(PIONEER_LANDS_DEFAULT),
        Format::Legacy => Some(LEGACY_LANDS_DEFAULT),
        Format::Pauper => Some(PAUPER_LANDS_DEFAULT),
        Format::Commander => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commander_ignores_archetype() {
        let direct = lookup_range(Format::Commander, Category::Lands, None);
        let keyed = lookup_range(Format::Commander, Category::Lands, Some(Archetype::Aggro));
        assert_eq!(direct, keyed);
        assert_eq!(direct.unwrap().min, Some(30));
        assert_eq!(direct.unwrap().max, Some(45));
    }

    #[test]
    fn test_modern_archetype_keyed() {
        let midrange = lookup_range(Format::Modern, Category::Lands, Some(Archetype::Midrange));
        assert_eq!(midrange.unwrap().typical, (24, 26));
    }

    #[test]
    fn test_default_archetype_fallback() {
        let none = lookup_range(Format::Modern, Category::Lands, None);
        assert_eq!(none, Some(MODERN_LANDS_DEFAULT));

        // Standard has no combo-specific entry; the default applies.
        let combo = lookup_range(Format::Standard, Category::Lands, Some(Archetype::Combo));
        assert_eq!(combo, Some(STANDARD_LANDS_DEFAULT));
    }

    #[test]
    fn test_missing_rule_is_none() {
        assert!(lookup_range(Format::Modern, Category::Ramp, None).is_none());
        assert!(lookup_range(Format::Pauper, Category::Draw, Some(Archetype::Control)).is_none());
    }

    #[test]
    fn test_bands_are_nested() {
        for format in [
            Format::Commander,
            Format::Modern,
            Format::Standard,
            Format::Pioneer,
            Format::Legacy,
            Format::Pauper,
        ] {
            for archetype in [
                None,
                Some(Archetype::Aggro),
                Some(Archetype::Midrange),
                Some(Archetype::Control),
                Some(Archetype::Combo),
            ] {
                let Some(r) = lookup_range(format, Category::Lands, archetype) else {
                    continue;
                };
                assert!(r.typical.0 <= r.typical.1);
                assert!(r.acceptable.0 <= r.typical.0);
                assert!(r.typical.1 <= r.acceptable.1);
                if let Some(min) = r.min {
                    assert!(min <= r.acceptable.0);
                }
                if let Some(max) = r.max {
                    assert!(r.acceptable.1 <= max);
                }
            }
        }
    }
}
