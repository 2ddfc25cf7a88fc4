//! Graded validation of generated numeric advice
//!
//! Every extracted recommendation gets a severity band; only actionable
//! problems surface from [`check_strategic_advice`]. The asymmetric
//! filtering (criticals only, plus the Modern-midrange low-land special
//! case) is intentional and preserved exactly: a wall of "acceptable"
//! verdicts would drown the one number the user must fix.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::extract::extract_numeric_recommendations;
use super::ranges::lookup_range;
use crate::types::{Archetype, Category, Format};

/// Severity band for one validated recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Acceptable,
    Typical,
}

/// Verdict for one numeric recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub severity: Severity,
    pub category: Category,
    pub value: u32,
    pub message: String,
}

impl ValidationResult {
    fn new(
        passed: bool,
        severity: Severity,
        category: Category,
        value: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            passed,
            severity,
            category,
            value,
            message: message.into(),
        }
    }
}

/// Grades one recommendation against the applicable range.
///
/// An undefined range for the (format, category, archetype) never blocks
/// advice: the verdict is passed/acceptable.
pub fn validate_heuristic(
    category: Category,
    value: u32,
    format: Format,
    archetype: Option<Archetype>,
) -> ValidationResult {
    let Some(range) = lookup_range(format, category, archetype) else {
        return ValidationResult::new(
            true,
            Severity::Acceptable,
            category,
            value,
            format!("No heuristic range defined for {category} in {format}"),
        );
    };

    if let Some(min) = range.min {
        if value < min {
            return ValidationResult::new(
                false,
                Severity::Critical,
                category,
                value,
                format!("{value} {category} is below the absolute minimum of {min} for {format}"),
            );
        }
    }
    if let Some(max) = range.max {
        if value > max {
            return ValidationResult::new(
                false,
                Severity::Critical,
                category,
                value,
                format!("{value} {category} exceeds the absolute maximum of {max} for {format}"),
            );
        }
    }

    let (typical_low, typical_high) = range.typical;
    if (typical_low..=typical_high).contains(&value) {
        return ValidationResult::new(
            true,
            Severity::Typical,
            category,
            value,
            format!("{value} {category} is in the typical {typical_low}-{typical_high} band"),
        );
    }

    let (acceptable_low, acceptable_high) = range.acceptable;
    if (acceptable_low..=acceptable_high).contains(&value) {
        return ValidationResult::new(
            true,
            Severity::Acceptable,
            category,
            value,
            format!(
                "{value} {category} is acceptable, outside the typical \
                 {typical_low}-{typical_high} band"
            ),
        );
    }

    // Outside both bands but inside the absolute limits: grade by how far
    // the value sits from the typical midpoint.
    let midpoint = (f64::from(typical_low) + f64::from(typical_high)) / 2.0;
    let width = f64::from(typical_high - typical_low);
    let distance = (f64::from(value) - midpoint).abs();

    if distance > 2.0 * width {
        ValidationResult::new(
            false,
            Severity::Critical,
            category,
            value,
            format!("{value} {category} is an extreme outlier for {format}"),
        )
    } else {
        ValidationResult::new(
            true,
            Severity::Warning,
            category,
            value,
            format!("{value} {category} is questionable for {format}"),
        )
    }
}

/// Validates the strategic numbers in a block of generated advice.
///
/// Extracts land counts always and ramp counts for singleton formats, then
/// returns only critical verdicts — plus Modern-midrange land counts below
/// 23 even at warning severity, where experience says low land advice does
/// real damage.
pub fn check_strategic_advice(
    text: &str,
    format: Format,
    archetype: Option<Archetype>,
) -> Vec<ValidationResult> {
    let mut flagged = Vec::new();

    for value in extract_numeric_recommendations(text, Category::Lands) {
        let result = validate_heuristic(Category::Lands, value, format, archetype);
        let modern_midrange_low_lands = format == Format::Modern
            && archetype == Some(Archetype::Midrange)
            && value < 23
            && result.severity == Severity::Warning;
        if result.severity == Severity::Critical || modern_midrange_low_lands {
            flagged.push(result);
        }
    }

    if format.is_singleton() {
        for value in extract_numeric_recommendations(text, Category::Ramp) {
            let result = validate_heuristic(Category::Ramp, value, format, archetype);
            if result.severity == Severity::Critical {
                flagged.push(result);
            }
        }
    }

    debug!(
        format = %format,
        flagged = flagged.len(),
        "strategic advice check complete"
    );
    flagged
}
