//! Display formatting for money and percentages
//!
//! The calculator never rounds; these helpers round only for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as currency with thousands separators and two decimals.
///
/// `format_currency(dec!(-1234.5), "$")` yields `-$1,234.50`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

/// Format a fraction as a percentage with at most two decimals (`0.525` → `52.5%`).
///
/// Fractions too large to express in percent yield `n/a`.
pub fn format_percent(fraction: Decimal) -> String {
    match fraction.checked_mul(Decimal::ONE_HUNDRED) {
        Some(percent) => {
            let percent = percent
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            format!("{}%", percent)
        }
        None => "n/a".to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
