use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::mode::CalculatorMode;
use crate::errors::CoreError;

/// Every numeric input a calculator panel can show, across all modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    // Average stock price
    OldAvgPrice,
    OldQty,
    NewPrice,
    NewQty,
    // Required quantity
    TargetAvgPrice,
    OldQtyReq,
    OldAvgPriceReq,
    NewPriceReq,
    // SIP
    CurrentCorpus,
    MonthlySip,
    AnnualReturn,
    Years,
}

const AVERAGE_STOCK_FIELDS: [Field; 4] = [
    Field::OldAvgPrice,
    Field::OldQty,
    Field::NewPrice,
    Field::NewQty,
];

const REQUIRED_QUANTITY_FIELDS: [Field; 4] = [
    Field::TargetAvgPrice,
    Field::OldQtyReq,
    Field::OldAvgPriceReq,
    Field::NewPriceReq,
];

const SIP_FIELDS: [Field; 4] = [
    Field::CurrentCorpus,
    Field::MonthlySip,
    Field::AnnualReturn,
    Field::Years,
];

impl Field {
    /// Fields of a mode, in the order they appear on the panel.
    #[must_use]
    pub fn for_mode(mode: CalculatorMode) -> &'static [Field] {
        match mode {
            CalculatorMode::AverageStock => &AVERAGE_STOCK_FIELDS,
            CalculatorMode::RequiredQuantity => &REQUIRED_QUANTITY_FIELDS,
            CalculatorMode::Sip => &SIP_FIELDS,
        }
    }

    /// Every field of every mode.
    pub fn all() -> impl Iterator<Item = Field> {
        CalculatorMode::ALL
            .into_iter()
            .flat_map(|m| Field::for_mode(m).iter().copied())
    }

    /// The mode whose section owns this field.
    #[must_use]
    pub fn mode(&self) -> CalculatorMode {
        match self {
            Field::OldAvgPrice | Field::OldQty | Field::NewPrice | Field::NewQty => {
                CalculatorMode::AverageStock
            }
            Field::TargetAvgPrice
            | Field::OldQtyReq
            | Field::OldAvgPriceReq
            | Field::NewPriceReq => CalculatorMode::RequiredQuantity,
            Field::CurrentCorpus | Field::MonthlySip | Field::AnnualReturn | Field::Years => {
                CalculatorMode::Sip
            }
        }
    }

    /// Element id stem; the panel element id is `{key}-{instance id}`.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Field::OldAvgPrice => "oldAvgPrice",
            Field::OldQty => "oldQty",
            Field::NewPrice => "newPrice",
            Field::NewQty => "newQty",
            Field::TargetAvgPrice => "targetAvgPrice",
            Field::OldQtyReq => "oldQtyReq",
            Field::OldAvgPriceReq => "oldAvgPriceReq",
            Field::NewPriceReq => "newPriceReq",
            Field::CurrentCorpus => "currentCorpus",
            Field::MonthlySip => "monthlySIP",
            Field::AnnualReturn => "annualReturn",
            Field::Years => "years",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Field::OldAvgPrice => "Old Average Stock Price",
            Field::OldQty => "Quantity of Old Stock",
            Field::NewPrice => "Price of New Stock",
            Field::NewQty => "Quantity to Buy",
            Field::TargetAvgPrice => "Target Average Stock Price",
            Field::OldQtyReq => "Old Quantity",
            Field::OldAvgPriceReq => "Old Average Price",
            Field::NewPriceReq => "New Purchase Price",
            Field::CurrentCorpus => "Current Corpus",
            Field::MonthlySip => "Monthly SIP",
            Field::AnnualReturn => "Expected Annual Return (%)",
            Field::Years => "Investment Period (Years)",
        }
    }

    /// Tooltip text for the field's help icon.
    #[must_use]
    pub fn help(&self) -> &'static str {
        match self {
            Field::OldAvgPrice => "The average price you paid for the shares you already hold.",
            Field::OldQty => "How many shares you already hold.",
            Field::NewPrice => "The price at which you are buying more shares.",
            Field::NewQty => "How many more shares you are buying.",
            Field::TargetAvgPrice => "The average price you want your holding to end up at.",
            Field::OldQtyReq => "How many shares you already hold.",
            Field::OldAvgPriceReq => "The average price you paid for the shares you already hold.",
            Field::NewPriceReq => "The current price at which you would buy more shares.",
            Field::CurrentCorpus => "Amount already invested today; it compounds for the whole period.",
            Field::MonthlySip => "Amount invested at the end of every month.",
            Field::AnnualReturn => "Expected yearly return in percent, compounded monthly.",
            Field::Years => "How long you keep investing, in years.",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::all()
            .find(|f| f.key() == s.trim())
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}
