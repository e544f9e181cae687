use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::Field;
use super::inputs::{parse_field, AverageStockInputs, RequiredQuantityInputs, SipInputs};
use super::mode::CalculatorMode;

/// State of one calculator panel.
///
/// Raw field text is kept for every mode, so switching modes never loses
/// what was typed into the hidden sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInstance {
    /// Slot id assigned by the registry; never changes
    pub id: u8,

    /// Section currently shown
    pub mode: CalculatorMode,

    /// Raw text per field; absent means empty
    #[serde(default)]
    values: BTreeMap<Field, String>,
}

impl CalculatorInstance {
    pub fn new(id: u8) -> Self {
        Self {
            id,
            mode: CalculatorMode::default(),
            values: BTreeMap::new(),
        }
    }

    /// Panel heading.
    #[must_use]
    pub fn title(&self) -> String {
        format!("Calculator {}", self.id)
    }

    /// Store the raw text of a field. Empty text clears the field.
    pub fn set_field(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, text);
        }
    }

    /// Raw text of a field (`""` when never set or cleared).
    #[must_use]
    pub fn field_text(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Numeric value of a field after lenient coercion.
    #[must_use]
    pub fn field_value(&self, field: Field) -> f64 {
        parse_field(self.field_text(field))
    }

    /// Clear every field of every mode. The active mode is kept.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// `true` when no field holds any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Field focused after pressing Enter in `field`, within the same section.
    /// `None` on the last field of the section (focus is released).
    #[must_use]
    pub fn next_field(&self, field: Field) -> Option<Field> {
        let section = Field::for_mode(field.mode());
        section
            .iter()
            .position(|f| *f == field)
            .and_then(|idx| section.get(idx + 1))
            .copied()
    }

    #[must_use]
    pub fn average_stock_inputs(&self) -> AverageStockInputs {
        AverageStockInputs {
            old_avg_price: self.field_value(Field::OldAvgPrice),
            old_qty: self.field_value(Field::OldQty),
            new_price: self.field_value(Field::NewPrice),
            new_qty: self.field_value(Field::NewQty),
        }
    }

    #[must_use]
    pub fn required_quantity_inputs(&self) -> RequiredQuantityInputs {
        RequiredQuantityInputs {
            target_avg_price: self.field_value(Field::TargetAvgPrice),
            old_qty: self.field_value(Field::OldQtyReq),
            old_avg_price: self.field_value(Field::OldAvgPriceReq),
            new_price: self.field_value(Field::NewPriceReq),
        }
    }

    #[must_use]
    pub fn sip_inputs(&self) -> SipInputs {
        SipInputs {
            current_corpus: self.field_value(Field::CurrentCorpus),
            monthly_sip: self.field_value(Field::MonthlySip),
            annual_return_percent: self.field_value(Field::AnnualReturn),
            years: self.field_value(Field::Years),
        }
    }
}
