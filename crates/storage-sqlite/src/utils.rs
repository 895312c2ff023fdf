//! Helpers for mapping column values between SQLite and domain types.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use dealership_core::errors::Result;

/// Percentages are stored as TEXT so no precision is lost.
pub fn decimal_to_text(value: Option<Decimal>) -> Option<String> {
    value.map(|d| d.normalize().to_string())
}

pub fn text_to_decimal(column: &str, value: Option<String>) -> Result<Option<Decimal>> {
    value
        .map(|raw| {
            Decimal::from_str(&raw).map_err(|e| {
                StorageError::InvalidValue(format!("{} '{}': {}", column, raw, e)).into()
            })
        })
        .transpose()
}

pub fn now() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_text_round_trip_keeps_precision() {
        let text = decimal_to_text(Some(dec!(33.3333333333))).unwrap();
        assert_eq!(text, "33.3333333333");
        assert_eq!(
            text_to_decimal("pct", Some(text)).unwrap(),
            Some(dec!(33.3333333333))
        );
    }

    #[test]
    fn test_trailing_zeros_are_dropped() {
        assert_eq!(decimal_to_text(Some(dec!(40.00))).unwrap(), "40");
    }

    #[test]
    fn test_garbage_text_is_an_error() {
        assert!(text_to_decimal("pct", Some("forty".to_string())).is_err());
        assert_eq!(text_to_decimal("pct", None).unwrap(), None);
    }
}
