//! Money representation
//!
//! Converts between user-entered decimal dollar strings ("12.5") and the
//! internal integral cent count (1250), and back.
//!
//! CRITICAL: All money values are i64 (cents). No floating point is used in
//! either direction, so every i64 formats and parses back to itself.

use thiserror::Error;

/// Number of cents in one dollar
pub const CENTS_PER_DOLLAR: i64 = 100;

/// Digits kept after the decimal point
const FRACTION_DIGITS: usize = 2;

/// Errors that can occur while reading a currency amount
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Amount must not be negative: {0} cents")]
    Negative(i64),

    #[error("Amount too large: game totals would exceed the largest representable amount")]
    Overflow,
}

/// Parse a decimal dollar string into cents
///
/// Rules:
/// - Surrounding whitespace is ignored; an empty string is 0
/// - No decimal point: whole dollars, multiplied by 100
/// - A one-digit fraction is padded ("12.5" is 1250)
/// - Fractions longer than two digits are truncated, not rounded
/// - An optional leading `-` is accepted so negative values round-trip
///
/// # Example
/// ```
/// use poker_ledger_core::core::money::parse_dollars_to_cents;
///
/// assert_eq!(parse_dollars_to_cents("12").unwrap(), 1200);
/// assert_eq!(parse_dollars_to_cents("12.5").unwrap(), 1250);
/// assert_eq!(parse_dollars_to_cents("12.567").unwrap(), 1256);
/// assert!(parse_dollars_to_cents(".5").is_err());
/// ```
pub fn parse_dollars_to_cents(input: &str) -> Result<i64, MoneyError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let invalid = || MoneyError::InvalidAmount(input.to_string());

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) {
        return Err(invalid());
    }

    // Pad short fractions with zeros, truncate long ones
    let fraction: String = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(FRACTION_DIGITS)
        .collect();

    // i128 so that i64::MIN's magnitude still parses before the sign is applied
    let magnitude: i128 = format!("{}{}", whole, fraction)
        .parse()
        .map_err(|_| invalid())?;
    let signed = if negative { -magnitude } else { magnitude };

    i64::try_from(signed).map_err(|_| invalid())
}

/// Parse a dollar string that must not be negative (chip counts, buy-in amount)
pub fn parse_non_negative_cents(input: &str) -> Result<i64, MoneyError> {
    let cents = parse_dollars_to_cents(input)?;
    if cents < 0 {
        return Err(MoneyError::Negative(cents));
    }
    Ok(cents)
}

/// Format cents as a fixed two-decimal dollar string
///
/// # Example
/// ```
/// use poker_ledger_core::core::money::format_cents_to_dollars;
///
/// assert_eq!(format_cents_to_dollars(1250), "12.50");
/// assert_eq!(format_cents_to_dollars(0), "0.00");
/// assert_eq!(format_cents_to_dollars(-150), "-1.50");
/// ```
pub fn format_cents_to_dollars(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let per_dollar = CENTS_PER_DOLLAR as u64;
    format!(
        "{}{}.{:02}",
        sign,
        magnitude / per_dollar,
        magnitude % per_dollar
    )
}

/// Format a balance for display: `+` for zero and above, natural minus below
///
/// # Example
/// ```
/// use poker_ledger_core::core::money::format_signed_cents;
///
/// assert_eq!(format_signed_cents(500), "+5.00");
/// assert_eq!(format_signed_cents(0), "+0.00");
/// assert_eq!(format_signed_cents(-700), "-7.00");
/// ```
pub fn format_signed_cents(cents: i64) -> String {
    if cents >= 0 {
        format!("+{}", format_cents_to_dollars(cents))
    } else {
        format_cents_to_dollars(cents)
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
