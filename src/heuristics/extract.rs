//! Numeric-recommendation extraction from generated prose
//!
//! The generation call returns unstructured text; this pulls out the card
//! counts it recommends for one category. Three shapes are recognized:
//! `36 lands`, `lands ... 36` and the range `36-38 lands`, which collapses
//! to its rounded midpoint. A number consumed by a range never also
//! reports as a standalone match.

use regex::Regex;
use std::collections::BTreeSet;

use crate::types::Category;

/// Phrases the generation output uses for each category.
fn keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Lands => &["lands", "land count", "land", "mana sources", "mana base"],
        Category::Ramp => &["ramp pieces", "ramp spells", "ramp", "mana rocks", "mana rock"],
        Category::Draw => &["card draw spells", "card draw", "draw spells", "cantrips"],
        Category::Removal => &["removal spells", "removal", "interaction", "answers"],
    }
}

fn keyword_alternation(category: Category) -> String {
    keywords(category)
        .iter()
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|")
}

/// Extracts the distinct numbers recommended for `category`, bounds-checked
/// to 1..=99, ascending.
pub fn extract_numeric_recommendations(text: &str, category: Category) -> Vec<u32> {
    let lower = text.to_lowercase();
    let kw = keyword_alternation(category);

    let range_re = Regex::new(&format!(
        r"\b(\d{{1,2}})\s*(?:-|–|—|to)\s*(\d{{1,2}})\s+(?:{kw})\b"
    ))
    .expect("valid regex");
    let leading_re =
        Regex::new(&format!(r"\b(\d{{1,2}})\s+(?:{kw})\b")).expect("valid regex");
    // The keyword-then-number shape needs a linking word so counts meant
    // for a different category ("36 lands and 10 ramp") do not bleed in.
    let trailing_re = Regex::new(&format!(
        r"(?:{kw})(?::|\s[^.\d\n]{{0,20}}?\b(?:to|of|at|around|is|be)\b)\s*(\d{{1,2}})\b"
    ))
    .expect("valid regex");

    let mut found = BTreeSet::new();

    // Consume range shapes first and blank them out so their endpoints do
    // not double-report through the single-number shapes.
    let mut masked = lower.clone().into_bytes();
    for caps in range_re.captures_iter(&lower) {
        let low: u32 = caps[1].parse().unwrap_or(0);
        let high: u32 = caps[2].parse().unwrap_or(0);
        if low >= 1 && high <= 99 && low <= high {
            let midpoint = (f64::from(low) + f64::from(high)) / 2.0;
            found.insert(midpoint.round() as u32);
        }
        let span = caps.get(0).expect("whole match").range();
        masked[span].fill(b' ');
    }
    let masked = String::from_utf8(masked).expect("mask preserves utf-8");

    for caps in leading_re.captures_iter(&masked) {
        if let Ok(value) = caps[1].parse::<u32>() {
            found.insert(value);
        }
    }
    for caps in trailing_re.captures_iter(&masked) {
        if let Ok(value) = caps[1].parse::<u32>() {
            found.insert(value);
        }
    }

    found.into_iter().filter(|v| (1..=99).contains(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number_shape() {
        assert_eq!(
            extract_numeric_recommendations("I would run 36 lands here.", Category::Lands),
            vec![36]
        );
    }

    #[test]
    fn test_keyword_then_number_shape() {
        assert_eq!(
            extract_numeric_recommendations(
                "Bring the land count up to 37 for consistency.",
                Category::Lands
            ),
            vec![37]
        );
    }

    #[test]
    fn test_range_collapses_to_midpoint() {
        assert_eq!(
            extract_numeric_recommendations("Run 36-38 lands for consistency", Category::Lands),
            vec![37]
        );
    }

    #[test]
    fn test_range_with_to_separator() {
        assert_eq!(
            extract_numeric_recommendations("Aim for 8 to 11 ramp pieces.", Category::Ramp),
            vec![10]
        );
    }

    #[test]
    fn test_range_endpoints_do_not_double_report() {
        let values =
            extract_numeric_recommendations("Run 36-38 lands, not 33 lands.", Category::Lands);
        assert_eq!(values, vec![33, 37]);
    }

    #[test]
    fn test_deduplicated_and_ascending() {
        let text = "Go to 36 lands. Yes, 36 lands. Maybe even 38 lands.";
        assert_eq!(
            extract_numeric_recommendations(text, Category::Lands),
            vec![36, 38]
        );
    }

    #[test]
    fn test_category_keywords_do_not_cross() {
        let text = "Play 36 lands and 10 ramp spells.";
        assert_eq!(
            extract_numeric_recommendations(text, Category::Ramp),
            vec![10]
        );
        assert_eq!(
            extract_numeric_recommendations(text, Category::Lands),
            vec![36]
        );
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(extract_numeric_recommendations("Mulligan aggressively.", Category::Lands)
            .is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            extract_numeric_recommendations("RUN 24 LANDS.", Category::Lands),
            vec![24]
        );
    }
}
