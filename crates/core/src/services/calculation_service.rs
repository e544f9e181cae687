use log::debug;

use crate::models::calculator::CalculatorInstance;
use crate::models::inputs::{AverageStockInputs, RequiredQuantityInputs, SipInputs};
use crate::models::mode::CalculatorMode;
use crate::models::results::{CalculatorResult, RequiredQuantity, SipProjection, SipYear};

/// Longest horizon the yearly SIP breakdown lists.
pub const MAX_SCHEDULE_YEARS: u32 = 100;

/// The calculator formulas.
///
/// Pure business logic: every method maps a numeric tuple to a result,
/// with no state and no dependency on which calculator asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculationService;

impl CalculationService {
    pub fn new() -> Self {
        Self
    }

    /// Weighted average cost after buying `new_qty` more shares at `new_price`.
    /// Returns `0` when the combined quantity is zero.
    #[must_use]
    pub fn average_stock_price(&self, inputs: &AverageStockInputs) -> f64 {
        let total_qty = inputs.old_qty + inputs.new_qty;
        if total_qty == 0.0 {
            return 0.0;
        }
        (inputs.old_avg_price * inputs.old_qty + inputs.new_price * inputs.new_qty) / total_qty
    }

    /// Quantity to buy at `new_price` so the holding averages `target_avg_price`.
    ///
    /// Checked in order: a zero denominator is `Invalid`, an empty holding
    /// needs `0`, and a negative solution is `NotPossible`.
    #[must_use]
    pub fn required_quantity(&self, inputs: &RequiredQuantityInputs) -> RequiredQuantity {
        let denominator = inputs.new_price - inputs.target_avg_price;
        if denominator == 0.0 {
            return RequiredQuantity::Invalid;
        }

        if inputs.old_qty == 0.0 {
            return RequiredQuantity::Solved {
                quantity: 0.0,
                total_price: 0.0,
            };
        }

        let quantity =
            inputs.old_qty * (inputs.target_avg_price - inputs.old_avg_price) / denominator;
        if quantity < 0.0 {
            return RequiredQuantity::NotPossible;
        }

        RequiredQuantity::Solved {
            quantity,
            total_price: quantity * inputs.new_price,
        }
    }

    /// Project an initial corpus plus monthly contributions, compounded monthly.
    #[must_use]
    pub fn sip_projection(&self, inputs: &SipInputs) -> SipProjection {
        if inputs.years == 0.0 {
            return SipProjection::default();
        }
        project(
            inputs.current_corpus,
            inputs.monthly_sip,
            monthly_rate(inputs.annual_return_percent),
            inputs.years * 12.0,
        )
    }

    /// Year-end snapshots for every whole year of the horizon, at most
    /// [`MAX_SCHEDULE_YEARS`] rows. Empty when `years` is below one.
    #[must_use]
    pub fn sip_schedule(&self, inputs: &SipInputs) -> Vec<SipYear> {
        if !inputs.years.is_finite() || inputs.years < 1.0 {
            return Vec::new();
        }

        let rate = monthly_rate(inputs.annual_return_percent);
        let whole_years = inputs.years.floor().min(f64::from(MAX_SCHEDULE_YEARS)) as u32;

        (1..=whole_years)
            .map(|year| {
                let p = project(
                    inputs.current_corpus,
                    inputs.monthly_sip,
                    rate,
                    f64::from(year) * 12.0,
                );
                SipYear {
                    year,
                    total_invested: p.total_invested,
                    future_value: p.future_value,
                    gains: p.gains,
                }
            })
            .collect()
    }

    /// Run the formula of the calculator's active mode on its current fields.
    #[must_use]
    pub fn evaluate(&self, calculator: &CalculatorInstance) -> CalculatorResult {
        let result = match calculator.mode {
            CalculatorMode::AverageStock => CalculatorResult::AverageStock {
                new_avg_price: self.average_stock_price(&calculator.average_stock_inputs()),
            },
            CalculatorMode::RequiredQuantity => CalculatorResult::RequiredQuantity(
                self.required_quantity(&calculator.required_quantity_inputs()),
            ),
            CalculatorMode::Sip => {
                CalculatorResult::Sip(self.sip_projection(&calculator.sip_inputs()))
            }
        };
        debug!("Calculator {} recomputed: {result:?}", calculator.id);
        result
    }
}

fn monthly_rate(annual_return_percent: f64) -> f64 {
    annual_return_percent / 100.0 / 12.0
}

fn project(corpus: f64, monthly_sip: f64, rate: f64, months: f64) -> SipProjection {
    let growth = (1.0 + rate).powf(months);
    let fv_corpus = corpus * growth;
    // Annuity formula divides by the rate; a zero rate is a straight sum.
    let fv_sip = if rate == 0.0 {
        monthly_sip * months
    } else {
        monthly_sip * (growth - 1.0) / rate
    };

    let future_value = fv_corpus + fv_sip;
    let total_invested = corpus + monthly_sip * months;

    SipProjection {
        total_invested,
        future_value,
        gains: future_value - total_invested,
    }
}
