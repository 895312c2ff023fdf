//! Parsing of raw keyboard input for the split form.
//!
//! Blank input returns `None` so a cleared field can be told apart from
//! zero. Input without any digit parses as zero.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::profit_split_calculator::clamp_percentage;

/// Parses a currency amount, keeping only ASCII digits.
///
/// A leading `-` makes the value negative, which clamps to 0. Values are
/// capped at `max` when given; digit strings that overflow `i64` saturate.
pub fn parse_amount_input(raw: &str, max: Option<i64>) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() || trimmed.starts_with('-') {
        return Some(0);
    }

    // Only overflow can fail here; everything left is a digit.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(match max {
        Some(max) => value.min(max.max(0)),
        None => value,
    })
}

/// Parses a percentage and clamps it to `[0, 100]`.
///
/// Keeps ASCII digits and the first `.`; everything else is dropped.
pub fn parse_percentage_input(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut cleaned = String::with_capacity(trimmed.len());
    let mut seen_dot = false;
    for c in trimmed.chars() {
        if c.is_ascii_digit() {
            cleaned.push(c);
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            cleaned.push(c);
        }
    }

    if !cleaned.chars().any(|c| c.is_ascii_digit()) || trimmed.starts_with('-') {
        return Some(Decimal::ZERO);
    }
    if cleaned.starts_with('.') {
        cleaned.insert(0, '0');
    }
    if cleaned.ends_with('.') {
        cleaned.pop();
    }

    // Too many digits for a Decimal is the only failure left, and anything
    // that long is far above 100.
    let value = Decimal::from_str(&cleaned).unwrap_or(Decimal::ONE_HUNDRED);
    Some(clamp_percentage(value))
}
