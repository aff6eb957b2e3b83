//! # Calculator Wizard
//!
//! Two-step price estimate: pick a ceiling type, enter the area, get a range.
//! Nothing here is persisted.

use crate::application::wizard::{Rejection, WizardInput, parse_area};
use crate::domain::action::Action;
use crate::domain::catalog::CeilingType;

/// Lower bound factor applied to `unit price × area`.
pub const LOW_FACTOR: f64 = 0.9;
/// Upper bound factor applied to `unit price × area`.
pub const HIGH_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorState {
    SelectType,
    EnterArea(CeilingType),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub kind: CeilingType,
    pub area: f64,
    pub unit_price: u32,
    pub low: u64,
    pub high: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorTransition {
    Advanced(CalculatorState),
    Rejected(CalculatorState, Rejection),
    /// Terminal: the session ends with this estimate.
    Estimated(Estimate),
    Cancelled,
}

/// Returns `(low, high)` rounded to whole rubles.
pub fn price_range(unit_price: u32, area: f64) -> (u64, u64) {
    let base = unit_price as f64 * area;
    (
        (base * LOW_FACTOR).round() as u64,
        (base * HIGH_FACTOR).round() as u64,
    )
}

impl CalculatorState {
    pub fn advance(self, input: &WizardInput) -> CalculatorTransition {
        match (self, input) {
            (_, WizardInput::Action(Action::Cancel)) => CalculatorTransition::Cancelled,
            // Picking a type again is allowed while waiting for the area.
            (_, WizardInput::Action(Action::CalcType(kind))) => {
                CalculatorTransition::Advanced(CalculatorState::EnterArea(*kind))
            }
            (CalculatorState::SelectType, WizardInput::Text(text)) => {
                let text = text.trim().to_lowercase();
                let kind = text
                    .parse()
                    .ok()
                    .and_then(CeilingType::from_number)
                    .or_else(|| CeilingType::from_code(&text));
                match kind {
                    Some(kind) => CalculatorTransition::Advanced(CalculatorState::EnterArea(kind)),
                    None => CalculatorTransition::Rejected(self, Rejection::CeilingTypeExpected),
                }
            }
            (CalculatorState::EnterArea(kind), WizardInput::Text(text)) => match parse_area(text) {
                Some(area) => {
                    let unit_price = kind.unit_price();
                    let (low, high) = price_range(unit_price, area);
                    CalculatorTransition::Estimated(Estimate {
                        kind,
                        area,
                        unit_price,
                        low,
                        high,
                    })
                }
                None => CalculatorTransition::Rejected(self, Rejection::InvalidArea),
            },
            (CalculatorState::SelectType, WizardInput::Action(_)) => {
                CalculatorTransition::Rejected(self, Rejection::CeilingTypeExpected)
            }
            (CalculatorState::EnterArea(_), WizardInput::Action(_)) => {
                CalculatorTransition::Rejected(self, Rejection::InvalidArea)
            }
        }
    }
}
