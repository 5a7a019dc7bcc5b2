//! Display formatting for currency, percentages and rate adjustments.
//!
//! Formatters are plain values: build one, share it by reference. Rounding
//! follows the "maximum fraction digits" convention: round to at most N
//! digits, then drop trailing zeros.

/// Formats money amounts such as `$1,234` or `-$12.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: &'static str,
    max_fraction_digits: usize,
}

impl CurrencyFormatter {
    pub const fn usd(max_fraction_digits: usize) -> Self {
        Self {
            symbol: "$",
            max_fraction_digits,
        }
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return "—".to_string();
        }
        let body = format_grouped(value.abs(), self.max_fraction_digits);
        if value < 0.0 && !is_zero(&body) {
            format!("-{}{}", self.symbol, body)
        } else {
            format!("{}{}", self.symbol, body)
        }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::usd(0)
    }
}

/// Formats decimal fractions as percentages: `0.1234` → `12.3%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentFormatter {
    max_fraction_digits: usize,
}

impl PercentFormatter {
    pub const fn new(max_fraction_digits: usize) -> Self {
        Self { max_fraction_digits }
    }

    pub fn format(&self, fraction: f64) -> String {
        if !fraction.is_finite() {
            return "—".to_string();
        }
        let body = format_grouped((fraction * 100.0).abs(), self.max_fraction_digits);
        if fraction < 0.0 && !is_zero(&body) {
            format!("-{}%", body)
        } else {
            format!("{}%", body)
        }
    }
}

impl Default for PercentFormatter {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Signed rate adjustment in basis points: `0.005` → `+50 bps`.
pub fn format_basis_points(delta: f64) -> String {
    let bps = (delta * 10_000.0).round() as i64;
    if bps > 0 {
        format!("+{} bps", bps)
    } else {
        format!("{} bps", bps)
    }
}

fn is_zero(formatted: &str) -> bool {
    formatted.chars().all(|c| matches!(c, '0' | '.' | ','))
}

/// Non-negative `value` rounded to `max_fraction_digits`, trailing zeros
/// trimmed, integer part grouped by thousands.
fn format_grouped(value: f64, max_fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", max_fraction_digits, value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if frac_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}
