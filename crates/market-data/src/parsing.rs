//! Lenient parsing of the textual numbers upstream feeds deliver.
//!
//! Providers send prices as strings with varying precision ("187.5",
//! "187.50000", "1.875e2") and volumes that are sometimes empty, missing or
//! written with a fractional part. These helpers keep full decimal precision
//! and never truncate a price.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal string, accepting plain and scientific notation.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parse a traded volume. Missing or blank values read as zero.
///
/// Returns `None` only for text that is present but not a non-negative number.
pub fn parse_volume(raw: Option<&str>) -> Option<u64> {
    let trimmed = match raw.map(str::trim) {
        None | Some("") => return Some(0),
        Some(value) => value,
    };

    if let Ok(volume) = trimmed.parse::<u64>() {
        return Some(volume);
    }

    parse_decimal(trimmed)
        .filter(|value| !value.is_sign_negative() || value.is_zero())
        .and_then(|value| value.trunc().to_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_keeps_precision() {
        assert_eq!(parse_decimal("187.50000"), Some(dec!(187.50000)));
        assert_eq!(parse_decimal(" 0.000123 "), Some(dec!(0.000123)));
        assert_eq!(parse_decimal("1.875e2"), Some(dec!(187.5)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("N/A"), None);
    }

    #[test]
    fn test_parse_volume() {
        assert_eq!(parse_volume(Some("1234567")), Some(1_234_567));
        assert_eq!(parse_volume(Some("1200.0")), Some(1200));
        assert_eq!(parse_volume(Some("")), Some(0));
        assert_eq!(parse_volume(None), Some(0));
        assert_eq!(parse_volume(Some("-5")), None);
        assert_eq!(parse_volume(Some("lots")), None);
    }
}
