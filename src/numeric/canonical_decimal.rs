// ============================================================================
// Canonical Decimal
// Lossless sign + digit-string representation handed to language strategies
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grouping separators stripped from typed text by default.
pub const DEFAULT_GROUPING_SEPARATORS: &[char] = &[',', '_', ' '];

/// Fractional digits kept when expanding a float.
pub const DEFAULT_FLOAT_FRACTION_DIGITS: usize = 20;

/// Largest exponent accepted in text such as `"1.5e21"`.
const MAX_TEXT_EXPONENT: i64 = 10_000;

/// A number as a sign plus two ASCII digit strings.
///
/// This is the only representation language strategies ever see, so no
/// strategy can lose digits to float rounding.
///
/// # Invariants
/// - `integer` is never empty and has no leading zero unless it is `"0"`
/// - `fraction` may be empty; typed trailing zeros are kept
/// - every character of both strings is `'0'..='9'`
/// - the value zero is never negative and has an empty fraction
///
/// # Example
/// ```
/// use num_verbalizer::numeric::CanonicalDecimal;
///
/// let d: CanonicalDecimal = "-1,234.50".parse().unwrap();
/// assert!(d.is_negative());
/// assert_eq!(d.integer_digits(), "1234");
/// assert_eq!(d.fraction_digits(), "50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanonicalDecimal {
    negative: bool,
    integer: String,
    fraction: String,
}

impl CanonicalDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            integer: "0".to_string(),
            fraction: String::new(),
        }
    }

    /// Create from a sign and raw digit strings.
    ///
    /// Leading zeros of `integer` are removed and an empty `integer` reads
    /// as `"0"`. An all-zero value collapses to [`CanonicalDecimal::zero`].
    ///
    /// # Errors
    /// Returns `InvalidInput` if either part contains a non-digit or both
    /// parts are empty.
    pub fn from_parts(negative: bool, integer: &str, fraction: &str) -> NumericResult<Self> {
        if integer.is_empty() && fraction.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !is_digits(integer) || !is_digits(fraction) {
            return Err(NumericError::InvalidInput);
        }
        Ok(Self::from_digits(negative, integer, fraction))
    }

    /// Normalize already-validated digit strings.
    fn from_digits(negative: bool, integer: &str, fraction: &str) -> Self {
        let trimmed = integer.trim_start_matches('0');
        let integer = if trimmed.is_empty() { "0" } else { trimmed };

        if integer == "0" && fraction.bytes().all(|b| b == b'0') {
            return Self::zero();
        }

        Self {
            negative,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        }
    }

    /// Expand a float to positional notation.
    ///
    /// The fraction is truncated to `max_fraction_digits` and trailing zeros
    /// are trimmed, so `1e21` becomes `"1000000000000000000000"` rather than
    /// an exponent form.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN and infinities.
    pub fn from_f64(value: f64, max_fraction_digits: usize) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }

        // `Display` for f64 prints the shortest round-trip digits and never
        // switches to exponent notation.
        let text = value.abs().to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let fraction = &fraction[..fraction.len().min(max_fraction_digits)];
        let fraction = fraction.trim_end_matches('0');

        Ok(Self::from_digits(value.is_sign_negative(), integer, fraction))
    }

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries where a financial calculation
    /// already produced an exact decimal. The scale is kept as-is, so
    /// `12.50` keeps its trailing zero.
    pub fn from_decimal(d: Decimal) -> Self {
        let scale = d.scale() as usize;
        let digits = d.mantissa().unsigned_abs().to_string();

        if digits.len() <= scale {
            let mut fraction = "0".repeat(scale - digits.len());
            fraction.push_str(&digits);
            Self::from_digits(d.is_sign_negative(), "0", &fraction)
        } else {
            let (integer, fraction) = digits.split_at(digits.len() - scale);
            Self::from_digits(d.is_sign_negative(), integer, fraction)
        }
    }

    /// Parse typed text, stripping the given grouping separators first.
    ///
    /// Accepts an optional sign, an optional decimal point and an optional
    /// exponent (`e`/`E`). The exponent shifts the decimal point on the digit
    /// string itself, so no digit passes through a float.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the text does not denote a number.
    pub fn parse_with_separators(text: &str, separators: &[char]) -> NumericResult<Self> {
        let cleaned: String = text
            .trim()
            .chars()
            .filter(|c| !separators.contains(c))
            .collect();

        let (negative, body) = if let Some(rest) = cleaned.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = cleaned.strip_prefix('+') {
            (false, rest)
        } else {
            (false, cleaned.as_str())
        };

        let (mantissa, exponent) = match body.find(|c| c == 'e' || c == 'E') {
            Some(pos) => (&body[..pos], parse_exponent(&body[pos + 1..])?),
            None => (body, 0),
        };

        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if integer.is_empty() && fraction.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !is_digits(integer) || !is_digits(fraction) {
            return Err(NumericError::InvalidInput);
        }

        if exponent == 0 {
            return Ok(Self::from_digits(negative, integer, fraction));
        }

        let mut digits = String::with_capacity(integer.len() + fraction.len());
        digits.push_str(integer);
        digits.push_str(fraction);
        let point = integer.len() as i64 + exponent;

        if point <= 0 {
            let mut shifted = "0".repeat(point.unsigned_abs() as usize);
            shifted.push_str(&digits);
            Ok(Self::from_digits(negative, "0", &shifted))
        } else if point as usize >= digits.len() {
            let padding = point as usize - digits.len();
            digits.push_str(&"0".repeat(padding));
            Ok(Self::from_digits(negative, &digits, ""))
        } else {
            let (integer, fraction) = digits.split_at(point as usize);
            Ok(Self::from_digits(negative, integer, fraction))
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whether the value is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer digits, most significant first.
    #[inline]
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Fraction digits exactly as typed or expanded; may be empty.
    #[inline]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.is_empty()
    }

    /// Same digits without the sign.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(s: &str) -> NumericResult<i64> {
    let exponent: i64 = s.parse().map_err(|_| NumericError::InvalidInput)?;
    if exponent.abs() > MAX_TEXT_EXPONENT {
        return Err(NumericError::InvalidInput);
    }
    Ok(exponent)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for CanonicalDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for CanonicalDecimal {
    type Err = NumericError;

    /// Parse typed text with the default grouping separators.
    ///
    /// # Examples
    /// - "1,234" -> 1234
    /// - "-0.50" -> -0.50
    /// - "1.5e3" -> 1500
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_separators(s, DEFAULT_GROUPING_SEPARATORS)
    }
}

impl From<Decimal> for CanonicalDecimal {
    fn from(d: Decimal) -> Self {
        Self::from_decimal(d)
    }
}

impl fmt::Display for CanonicalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
