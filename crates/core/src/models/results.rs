use serde::{Deserialize, Serialize};

use super::mode::CalculatorMode;

/// Outcome of the required quantity calculation.
///
/// The two sentinel variants are regular outcomes rendered as text, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RequiredQuantity {
    /// A non-negative quantity reaches the target
    Solved { quantity: f64, total_price: f64 },
    /// New price equals the target: no solution or infinitely many
    Invalid,
    /// Only selling could reach the target
    NotPossible,
}

impl RequiredQuantity {
    /// Required quantity, if the target is reachable.
    #[must_use]
    pub fn quantity(&self) -> Option<f64> {
        match self {
            RequiredQuantity::Solved { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }

    /// Cost of the purchase; sentinels report `0`.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        match self {
            RequiredQuantity::Solved { total_price, .. } => *total_price,
            _ => 0.0,
        }
    }

    /// Text shown in place of the quantity for the sentinel outcomes.
    #[must_use]
    pub fn sentinel_label(&self) -> Option<&'static str> {
        match self {
            RequiredQuantity::Solved { .. } => None,
            RequiredQuantity::Invalid => Some("Invalid"),
            RequiredQuantity::NotPossible => Some("Not possible"),
        }
    }
}

/// Result of a SIP projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SipProjection {
    /// Corpus plus every monthly contribution
    pub total_invested: f64,
    /// Projected value at the end of the horizon
    pub future_value: f64,
    /// `future_value - total_invested`
    pub gains: f64,
}

/// One row of the year-by-year SIP breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipYear {
    /// 1-based year number
    pub year: u32,
    pub total_invested: f64,
    pub future_value: f64,
    pub gains: f64,
}

/// Result of whichever formula a calculator currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CalculatorResult {
    AverageStock { new_avg_price: f64 },
    RequiredQuantity(RequiredQuantity),
    Sip(SipProjection),
}

impl CalculatorResult {
    /// All-zero result shown right after a reset, whatever the mode.
    #[must_use]
    pub fn cleared(mode: CalculatorMode) -> Self {
        match mode {
            CalculatorMode::AverageStock => CalculatorResult::AverageStock { new_avg_price: 0.0 },
            CalculatorMode::RequiredQuantity => {
                CalculatorResult::RequiredQuantity(RequiredQuantity::Solved {
                    quantity: 0.0,
                    total_price: 0.0,
                })
            }
            CalculatorMode::Sip => CalculatorResult::Sip(SipProjection::default()),
        }
    }
}

/// Results of one calculator rendered through the current display format,
/// as `(label, text)` pairs in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedResult {
    pub lines: Vec<(String, String)>,
}

impl RenderedResult {
    /// Text rendered for the given label, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, text)| text.as_str())
    }
}

// ── Result labels ───────────────────────────────────────────────────

pub const NEW_AVERAGE_PRICE: &str = "New Average Price";
pub const REQUIRED_QUANTITY: &str = "Required Quantity";
pub const TOTAL_PRICE: &str = "Total Price";
pub const TOTAL_INVESTED: &str = "Total Invested";
pub const FUTURE_VALUE: &str = "Future Value";
pub const GAINS: &str = "Gains";
