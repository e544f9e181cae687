use crate::models::display_format::DisplayFormat;
use crate::models::inputs::parse_number;

/// Renders numbers with two decimals and the configured digit grouping.
///
/// Holds the process-wide display format; calculators share one formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatter {
    format: DisplayFormat,
}

impl NumberFormatter {
    pub fn new(format: DisplayFormat) -> Self {
        Self { format }
    }

    #[must_use]
    pub fn format(&self) -> DisplayFormat {
        self.format
    }

    pub fn set_format(&mut self, format: DisplayFormat) {
        self.format = format;
    }

    /// Render a value. Non-finite values render as `"0"`.
    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        format_number(value, self.format)
    }

    /// Render raw field text. Text without a numeric prefix renders as `"0"`.
    #[must_use]
    pub fn format_text(&self, raw: &str) -> String {
        match parse_number(raw) {
            Some(value) => self.format_number(value),
            None => "0".to_string(),
        }
    }
}

/// Render `value` with exactly two decimals under `format`.
///
/// `1000000` gives `1000000.00`, `1,000,000.00` or `10,00,000.00`.
#[must_use]
pub fn format_number(value: f64, format: DisplayFormat) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = match format {
        DisplayFormat::Plain => int_part.to_string(),
        DisplayFormat::GroupedStandard => group_standard(int_part),
        DisplayFormat::GroupedIndian => group_indian(int_part),
    };

    // No "-0.00" for values that round to zero
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    format!("{sign}{grouped}.{frac_part}")
}

fn group_standard(digits: &str) -> String {
    join_groups(digits, 3)
}

/// Last three digits form one group, everything before is grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{},{tail}", join_groups(head, 2))
}

/// Insert a comma every `size` digits counting from the right.
fn join_groups(digits: &str, size: usize) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / size);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
