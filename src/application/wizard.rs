//! # Wizard Input
//!
//! Shared vocabulary of the intake and calculator wizards: what a step receives,
//! why a step refused it, and the free-text validators both wizards use.

use crate::domain::action::Action;

/// One inbound event, as seen by the active wizard step.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardInput {
    Text(String),
    Action(Action),
}

/// Why a step did not advance. The step prompt is resent with a matching notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UnknownService,
    InvalidArea,
    AddressTooShort,
    DateChoiceExpected,
    DateTooShort,
    ContactsTooShort,
    TextExpected,
    DecisionExpected,
    CeilingTypeExpected,
}

/// Largest area either wizard accepts, in m².
pub const MAX_AREA: f64 = 100_000.0;

/// Parses an area in m². Accepts a decimal comma ("25,5"); must be in `(0, MAX_AREA]`.
pub fn parse_area(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|a| *a > 0.0 && *a <= MAX_AREA)
}

/// Trimmed text, if it has more than `min` characters.
pub fn longer_than(text: &str, min: usize) -> Option<String> {
    let trimmed = text.trim();
    (trimmed.chars().count() > min).then(|| trimmed.to_string())
}
