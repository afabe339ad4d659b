//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Discounted prices need sub-cent precision:                             │
//! │    10.99 at 15% off = 9.3415 exactly                                    │
//! │    Rounding each line to cents too early drifts the grand total.        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Ten-Thousandths                                  │
//! │    One unit = 10_000 subunits, so a cent price times an integer         │
//! │    percent is always exact. Rounding to cents happens once, at the      │
//! │    display/serialization boundary, never mid-calculation.               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use corner_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // 10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // 21.98
//! let total = price + Money::from_cents(500);  // 15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Scale Constants
// =============================================================================

/// Subunits per major currency unit (1 unit = 10_000 subunits).
const SUBUNITS_PER_UNIT: i64 = 10_000;

/// Subunits per cent (1 cent = 100 subunits).
const SUBUNITS_PER_CENT: i64 = 100;

/// Number of decimal places the fixed-point representation can hold.
const FRACTIONAL_DIGITS: usize = 4;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in ten-thousandths of the major currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and deltas
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Scale 10_000**: A cent-denominated price times an integer percent is
///   exact; no intermediate rounding is ever needed
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ProductRecord.usual_price ──► selling_price() ──► line totals          │
/// │                                                                         │
/// │  line totals ──► Cart grand total ──► Receipt                           │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type.            │
/// │  Cent rounding happens exactly once, in Display.                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use corner_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents_rounded(), 1099);
    /// ```
    ///
    /// ## Why Cents?
    /// Catalog prices are quoted in whole cents. Construction from cents is
    /// always exact; the extra two fractional digits exist for discount math.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * SUBUNITS_PER_CENT)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use corner_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // 10.99
    /// assert_eq!(price.cents_rounded(), 1099);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -5.50
    /// assert_eq!(negative.cents_rounded(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * SUBUNITS_PER_UNIT - minor * SUBUNITS_PER_CENT)
        } else {
            Money(major * SUBUNITS_PER_UNIT + minor * SUBUNITS_PER_CENT)
        }
    }

    /// Creates a Money value directly from subunits (ten-thousandths).
    ///
    /// Mainly useful in tests and for round-tripping raw values.
    #[inline]
    pub const fn from_subunits(subunits: i64) -> Self {
        Money(subunits)
    }

    /// Returns the raw value in subunits (ten-thousandths of a unit).
    #[inline]
    pub const fn subunits(&self) -> i64 {
        self.0
    }

    /// Returns the value rounded to whole cents, half away from zero.
    ///
    /// This is the presentation-boundary rounding: internal arithmetic keeps
    /// full precision, and only display and serialization collapse to cents.
    ///
    /// ## Example
    /// ```rust
    /// use corner_core::money::Money;
    ///
    /// let exact = Money::from_subunits(93_415); // 9.3415
    /// assert_eq!(exact.cents_rounded(), 934);   // 9.34
    ///
    /// let half = Money::from_subunits(93_450);  // 9.345
    /// assert_eq!(half.cents_rounded(), 935);    // 9.35 (half rounds up)
    /// ```
    #[inline]
    pub const fn cents_rounded(&self) -> i64 {
        if self.0 >= 0 {
            (self.0 + SUBUNITS_PER_CENT / 2) / SUBUNITS_PER_CENT
        } else {
            (self.0 - SUBUNITS_PER_CENT / 2) / SUBUNITS_PER_CENT
        }
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use corner_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// Percentages above 100 are clamped to 100 (price floor is zero).
    ///
    /// ## Why This Is Exact
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  price in subunits is cents × 100, so                               │
    /// │                                                                     │
    /// │    subunits × (100 - percent)                                       │
    /// │    ──────────────────────────   =  cents × (100 - percent)          │
    /// │             100                                                     │
    /// │                                                                     │
    /// │  which is a whole number of subunits. The +50 half-up term only     │
    /// │  matters for prices that were already finer than a cent.            │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use corner_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);      // 10.99
    /// let selling = price.percent_off(15);      // 9.3415 exactly
    /// assert_eq!(selling.subunits(), 93_415);
    /// assert_eq!(selling.to_string(), "9.34");  // rounded at display only
    /// ```
    pub fn percent_off(&self, percent: u8) -> Money {
        // Use i128 to prevent overflow on large amounts
        let keep = (100 - percent.min(100) as i64) as i128;
        let discounted = (self.0 as i128 * keep + 50) / 100;
        Money(discounted as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// Returns `None` when the result does not fit the subunit range.
    ///
    /// ## Example
    /// ```rust
    /// use corner_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // 2.99
    /// let line_total = unit_price.multiply_quantity(3).unwrap();
    /// assert_eq!(line_total.cents_rounded(), 897); // 8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(subunits) => Some(Money(subunits)),
            None => None,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error produced when a decimal string cannot be read as a Money value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,
    #[error("amount contains a non-digit character")]
    InvalidDigit,
    #[error("amount has more than {} decimal places", FRACTIONAL_DIGITS)]
    TooManyDecimals,
    #[error("amount is out of range")]
    Overflow,
}

/// Parses a plain decimal string such as `"12"`, `"12.5"` or `"12.3415"`.
///
/// Leading/trailing whitespace is ignored and a leading `-` is accepted.
/// Anything finer than ten-thousandths is rejected rather than silently
/// rounded.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(ParseMoneyError::Empty);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseMoneyError::InvalidDigit);
        }
        if frac.len() > FRACTIONAL_DIGITS {
            return Err(ParseMoneyError::TooManyDecimals);
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError::Overflow)?
        };
        let mut subunits = units
            .checked_mul(SUBUNITS_PER_UNIT)
            .ok_or(ParseMoneyError::Overflow)?;

        if !frac.is_empty() {
            // "3" scales to 3000, "34" to 3400, "3415" to 3415
            let digits: i64 = frac.parse().map_err(|_| ParseMoneyError::Overflow)?;
            let scaled = digits * 10_i64.pow((FRACTIONAL_DIGITS - frac.len()) as u32);
            subunits = subunits
                .checked_add(scaled)
                .ok_or(ParseMoneyError::Overflow)?;
        }

        Ok(Money(if negative { -subunits } else { subunits }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the value rounded to two decimal places, half away from
/// zero, with no currency symbol.
///
/// ## Note
/// This is the single cent-rounding boundary in the system. The catalog file
/// serializer and log output both go through it; currency symbols are a
/// presentation concern and never appear here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents_rounded();
        let sign = if cents < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (cents / 100).abs(), (cents % 100).abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.subunits(), 109_900);
        assert_eq!(money.cents_rounded(), 1099);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents_rounded(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents_rounded(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(format!("{}", Money::from_subunits(93_415)), "9.34");
        assert_eq!(format!("{}", Money::from_subunits(93_450)), "9.35");
        assert_eq!(format!("{}", Money::from_subunits(-93_450)), "-9.35");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents_rounded(), 1500);
        assert_eq!((a - b).cents_rounded(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents_rounded(), 3000);
    }

    #[test]
    fn test_percent_off_basic() {
        // 100.00 at 10% off = 90.00
        let amount = Money::from_cents(10_000);
        assert_eq!(amount.percent_off(10), Money::from_cents(9_000));
    }

    #[test]
    fn test_percent_off_keeps_full_precision() {
        // 10.99 at 15% off = 9.3415, held exactly
        let price = Money::from_cents(1099);
        let selling = price.percent_off(15);
        assert_eq!(selling.subunits(), 93_415);
        // Rounding to cents happens only at display time
        assert_eq!(selling.to_string(), "9.34");
    }

    #[test]
    fn test_percent_off_edges() {
        let price = Money::from_cents(1099);
        assert_eq!(price.percent_off(0), price);
        assert_eq!(price.percent_off(100), Money::zero());
        // Values above 100 clamp to a zero price
        assert_eq!(price.percent_off(200), Money::zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let line_total = unit_price.multiply_quantity(3).unwrap();
        assert_eq!(line_total.cents_rounded(), 897);

        assert_eq!(unit_price.multiply_quantity(0), Some(Money::zero()));
        assert_eq!(unit_price.multiply_quantity(i64::MAX), None);
    }

    /// Critical test: a discounted line sums without drift.
    /// 3 × (10.99 at 15% off) must equal 3 × 9.3415 = 28.0245, not
    /// 3 × 9.34 = 28.02 computed from pre-rounded cents.
    #[test]
    fn test_line_totals_do_not_drift() {
        let selling = Money::from_cents(1099).percent_off(15);
        let line_total = selling.multiply_quantity(3).unwrap();
        assert_eq!(line_total.subunits(), 280_245);
        assert_eq!(line_total.to_string(), "28.02");
    }

    #[test]
    fn test_parse_plain_and_fractional() {
        assert_eq!("12".parse::<Money>(), Ok(Money::from_cents(1200)));
        assert_eq!("12.5".parse::<Money>(), Ok(Money::from_cents(1250)));
        assert_eq!("12.34".parse::<Money>(), Ok(Money::from_cents(1234)));
        assert_eq!("9.3415".parse::<Money>(), Ok(Money::from_subunits(93_415)));
        assert_eq!("0.05".parse::<Money>(), Ok(Money::from_cents(5)));
        assert_eq!(".5".parse::<Money>(), Ok(Money::from_cents(50)));
        assert_eq!(" 3.00 ".parse::<Money>(), Ok(Money::from_cents(300)));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!("-4.25".parse::<Money>(), Ok(Money::from_cents(-425)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("-".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("12.3.4".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!("abc".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!("1,50".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!(
            "1.23456".parse::<Money>(),
            Err(ParseMoneyError::TooManyDecimals)
        );
        assert_eq!(
            "99999999999999999999".parse::<Money>(),
            Err(ParseMoneyError::Overflow)
        );
    }

    #[test]
    fn test_parse_display_round_trip_for_cent_prices() {
        for cents in [0, 1, 99, 100, 1099, 123_456] {
            let money = Money::from_cents(cents);
            let parsed: Money = money.to_string().parse().unwrap();
            assert_eq!(parsed, money);
        }
    }
}
