use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Digit-grouping convention applied when a result is rendered as text.
/// Process-wide, persisted under the `numberFormat` preference key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayFormat {
    /// No grouping: `1000000.00`
    Plain,
    /// Thousands grouping: `1,000,000.00`
    #[default]
    GroupedStandard,
    /// Lakh/crore grouping, 3 then 2s: `10,00,000.00`
    GroupedIndian,
}

impl DisplayFormat {
    pub const ALL: [DisplayFormat; 3] = [
        DisplayFormat::Plain,
        DisplayFormat::GroupedStandard,
        DisplayFormat::GroupedIndian,
    ];

    /// Value written to the preference store.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            DisplayFormat::Plain => "none",
            DisplayFormat::GroupedStandard => "standard",
            DisplayFormat::GroupedIndian => "indian",
        }
    }
}

impl std::fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayFormat::Plain => write!(f, "No grouping"),
            DisplayFormat::GroupedStandard => write!(f, "1,000,000"),
            DisplayFormat::GroupedIndian => write!(f, "10,00,000"),
        }
    }
}

impl FromStr for DisplayFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayFormat::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownDisplayFormat(s.to_string()))
    }
}
