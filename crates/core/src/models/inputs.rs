use serde::{Deserialize, Serialize};

/// Coerce raw field text to a number.
///
/// Leading whitespace is skipped and the longest numeric prefix is used
/// (`"12.5abc"` → `12.5`). Empty, non-numeric and non-finite input yields `0.0`.
#[must_use]
pub fn parse_field(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

/// Numeric prefix of `raw`, or `None` when there is none or it is not finite.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| i < bytes.len() && bytes[i].is_ascii_digit();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        // "5e" or "5e+" keep only the mantissa
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        // "-0" reads as plain zero
        Ok(v) if v == 0.0 => Some(0.0),
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Inputs of the average stock price calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageStockInputs {
    /// Average price paid for the shares already held
    pub old_avg_price: f64,
    /// Number of shares already held
    pub old_qty: f64,
    /// Price of the new purchase
    pub new_price: f64,
    /// Number of shares to buy
    pub new_qty: f64,
}

/// Inputs of the required quantity calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredQuantityInputs {
    /// Average price the holding should end up at
    pub target_avg_price: f64,
    /// Number of shares already held
    pub old_qty: f64,
    /// Average price paid for the shares already held
    pub old_avg_price: f64,
    /// Price at which the additional shares would be bought
    pub new_price: f64,
}

/// Inputs of the SIP projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SipInputs {
    /// Lump sum already invested at the start
    pub current_corpus: f64,
    /// Contribution added every month
    pub monthly_sip: f64,
    /// Expected annual return in percent (12 means 12%)
    pub annual_return_percent: f64,
    /// Investment horizon in years (fractions allowed)
    pub years: f64,
}
