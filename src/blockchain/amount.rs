// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Exact conversion between human-readable amounts and base units.

use alloy::primitives::U256;

/// Reasons a decimal string cannot be represented in base units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("amount must be an unsigned decimal number, got `{0}`")]
    Malformed(String),

    #[error("too many decimal places (max {max})")]
    TooManyDecimals { max: u8 },

    #[error("amount overflows 256 bits")]
    Overflow,
}

/// Parse a human-readable amount into base units.
///
/// `"10.25"` at 6 decimals is `10_250_000`. Accepts `digits[.digits]`,
/// including `".5"` and `"5."`; signs, whitespace and exponents are rejected.
/// Fails when the value needs more fractional digits than `decimals`.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    let (whole, fraction) = split_decimal(amount)?;

    // Trailing zeros never need precision: "1.50" is fine at one decimal.
    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(AmountError::TooManyDecimals { max: decimals });
    }

    // Pad the fraction to exactly `decimals` digits and read the whole thing as
    // one integer, so no intermediate value is ever fractional.
    let digits = format!("{whole}{fraction:0<width$}", width = decimals as usize);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 10).map_err(|_| AmountError::Overflow)
}

/// Check that `amount` is a well-formed unsigned decimal, independent of any
/// precision.
pub fn validate_amount(amount: &str) -> Result<(), AmountError> {
    split_decimal(amount).map(|_| ())
}

/// Split into whole and fractional digit runs.
fn split_decimal(amount: &str) -> Result<(&str, &str), AmountError> {
    if amount.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(AmountError::Malformed(amount.to_string()));
    }

    Ok((whole, fraction))
}

/// Format base units as a decimal string.
///
/// Trailing fractional zeros are trimmed but one fractional digit is always
/// kept, so `250_000_000` at 6 decimals renders as `"250.0"`.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let decimals = decimals as usize;
    // Work on the digit string so precisions above 77 never overflow a U256.
    let digits = format!("{:0>width$}", amount.to_string(), width = decimals + 1);
    let (whole, fraction) = digits.split_at(digits.len() - decimals);

    let trimmed = fraction.trim_end_matches('0');
    if trimmed.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_units_whole() {
        assert_eq!(
            parse_units("1", 18).unwrap(),
            U256::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_parse_units_decimal() {
        assert_eq!(parse_units("10.25", 6).unwrap(), U256::from(10_250_000u64));
        assert_eq!(parse_units("12.50", 6).unwrap(), U256::from(12_500_000u64));
        assert_eq!(parse_units(".5", 6).unwrap(), U256::from(500_000u64));
        assert_eq!(parse_units("5.", 6).unwrap(), U256::from(5_000_000u64));
        assert_eq!(parse_units("0.000", 6).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_parse_units_beyond_u128() {
        // 10^30 tokens at 18 decimals does not fit in a u128.
        let amount = format!("1{}", "0".repeat(30));
        let expected = U256::from(10u64).pow(U256::from(48u64));
        assert_eq!(parse_units(&amount, 18).unwrap(), expected);
    }

    #[test]
    fn test_parse_units_rejects_malformed() {
        for bad in ["-1", "+1", "1e6", "1.2.3", "abc", " 1", "1 ", ".", "1,5"] {
            assert!(
                matches!(parse_units(bad, 6), Err(AmountError::Malformed(_))),
                "expected `{bad}` to be rejected"
            );
        }
        assert_eq!(parse_units("", 6), Err(AmountError::Empty));
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("12.50").is_ok());
        assert!(validate_amount("0.123456789012345678901234").is_ok());
        assert_eq!(
            validate_amount("-3"),
            Err(AmountError::Malformed("-3".to_string()))
        );
        assert_eq!(validate_amount(""), Err(AmountError::Empty));
    }

    #[test]
    fn test_parse_units_rejects_excess_precision() {
        assert_eq!(
            parse_units("1.1234567", 6),
            Err(AmountError::TooManyDecimals { max: 6 })
        );
        assert_eq!(
            parse_units("1.5", 0),
            Err(AmountError::TooManyDecimals { max: 0 })
        );
        assert_eq!(parse_units("1.50", 1).unwrap(), U256::from(15u64));
    }

    #[test]
    fn test_extreme_precision_roundtrip() {
        let text = format_units(U256::MAX, 255);
        assert!(text.starts_with("0."));
        assert_eq!(parse_units(&text, 255).unwrap(), U256::MAX);
        assert_eq!(parse_units(&format_units(U256::MAX, 0), 0).unwrap(), U256::MAX);
    }

    #[test]
    fn test_parse_units_overflow() {
        let huge = "9".repeat(80);
        assert_eq!(parse_units(&huge, 0), Err(AmountError::Overflow));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(
            format_units(U256::from(1_500_000_000_000_000_000u64), 18),
            "1.5"
        );
        assert_eq!(format_units(U256::from(250_000_000u64), 6), "250.0");
        assert_eq!(format_units(U256::from(1u64), 6), "0.000001");
        assert_eq!(format_units(U256::ZERO, 18), "0.0");
        assert_eq!(format_units(U256::from(42u64), 0), "42.0");
        assert_eq!(
            format_units(U256::from(5u64), 100),
            format!("0.{}5", "0".repeat(99))
        );
    }

    /// Full-width values mixed with small ones, so short digit strings that
    /// need left padding are exercised too.
    fn base_units() -> impl Strategy<Value = U256> {
        prop_oneof![
            any::<[u64; 4]>().prop_map(U256::from_limbs),
            any::<u64>().prop_map(|v| U256::from(v)),
            Just(U256::ZERO),
            Just(U256::MAX),
        ]
    }

    proptest! {
        /// Formatting then parsing reproduces the base-unit value exactly.
        #[test]
        fn format_parse_roundtrip(value in base_units(), decimals in 0u8..=255) {
            let text = format_units(value, decimals);
            prop_assert_eq!(parse_units(&text, decimals).unwrap(), value);
        }

        /// A clean decimal string keeps its numeric value through base units.
        #[test]
        fn parse_format_preserves_value(
            whole in 0u64..1_000_000_000,
            fraction in "[0-9]{0,6}",
            decimals in 6u8..=18,
        ) {
            let input = if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            };
            let units = parse_units(&input, decimals).unwrap();
            let formatted = format_units(units, decimals);
            prop_assert_eq!(parse_units(&formatted, decimals).unwrap(), units);

            let expected_fraction = fraction.trim_end_matches('0');
            let expected = if expected_fraction.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{expected_fraction}")
            };
            prop_assert_eq!(formatted, expected);
        }

        /// Strings with more fractional digits than allowed are rejected.
        #[test]
        fn rejects_excess_fraction_digits(decimals in 0u8..=18, extra in 1usize..4) {
            let input = format!("1.{}", "1".repeat(decimals as usize + extra));
            prop_assert_eq!(
                parse_units(&input, decimals),
                Err(AmountError::TooManyDecimals { max: decimals })
            );
        }
    }
}
