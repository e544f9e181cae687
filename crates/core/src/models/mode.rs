use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// The formula a calculator panel currently shows.
/// Each instance has exactly one active mode; new instances start on `AverageStock`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorMode {
    /// Blend an existing holding with a new purchase into a new average price
    #[default]
    AverageStock,
    /// Solve for the quantity to buy to reach a target average price
    RequiredQuantity,
    /// Project a Systematic Investment Plan with an initial corpus
    Sip,
}

impl CalculatorMode {
    /// All modes in the order the mode switcher lists them.
    pub const ALL: [CalculatorMode; 3] = [
        CalculatorMode::AverageStock,
        CalculatorMode::RequiredQuantity,
        CalculatorMode::Sip,
    ];

    /// Stable identifier used by the switcher (`avgStock`, `requiredQty`, `sip`).
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            CalculatorMode::AverageStock => "avgStock",
            CalculatorMode::RequiredQuantity => "requiredQty",
            CalculatorMode::Sip => "sip",
        }
    }

    /// Section heading shown above the mode's inputs.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorMode::AverageStock => "Average Stock Price",
            CalculatorMode::RequiredQuantity => "Required Quantity & Price",
            CalculatorMode::Sip => "SIP Calculator",
        }
    }
}

impl std::fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for CalculatorMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorMode::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownMode(s.to_string()))
    }
}
