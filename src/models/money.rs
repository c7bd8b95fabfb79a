//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so every planning and replay step
//! is exact and reproducible. Floating point only appears at the edges:
//! [`Money::from_decimal`] for human-entered literals and
//! [`Money::to_decimal`] for ratio reporting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Result of splitting an amount into equal parts
///
/// A non-positive part count yields [`Division::NoParts`] rather than an
/// error, so callers have to handle that case explicitly instead of mistaking
/// it for "divided into zero-value parts".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Division {
    /// The requested part count was zero or negative
    NoParts,
    /// Exactly `n` parts; all but the last equal, the last carries the remainder
    Parts(Vec<Money>),
}

impl Division {
    /// The parts, or an empty slice for [`Division::NoParts`]
    pub fn parts(&self) -> &[Money] {
        match self {
            Self::NoParts => &[],
            Self::Parts(parts) => parts,
        }
    }

    /// The first part, used when the division stands for a per-unit rate
    pub fn first(&self) -> Option<Money> {
        self.parts().first().copied()
    }

    /// Consume the division, returning its parts
    pub fn into_parts(self) -> Vec<Money> {
        match self {
            Self::NoParts => Vec::new(),
            Self::Parts(parts) => parts,
        }
    }

    /// Check if the division produced no parts
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoParts)
    }
}

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use smoother::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a decimal literal to cents, truncating toward zero
    ///
    /// # Examples
    /// ```
    /// use smoother::models::Money;
    /// assert_eq!(Money::from_decimal(123.456).cents(), 12345);
    /// ```
    pub fn from_decimal(value: f64) -> Self {
        Self((value * 100.0) as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiply by an integer factor (day counts, sign flips)
    pub const fn multiply(&self, factor: i64) -> Self {
        Self(self.0 * factor)
    }

    /// Split into `n` parts that sum exactly to this amount
    ///
    /// Every part but the last is `self / n` (truncated); the last part takes
    /// whatever is left over.
    ///
    /// # Examples
    /// ```
    /// use smoother::models::Money;
    /// let parts = Money::from_cents(10003).divide(2);
    /// assert_eq!(parts.parts(), &[Money::from_cents(5001), Money::from_cents(5002)]);
    /// ```
    pub fn divide(&self, n: i64) -> Division {
        if n <= 0 {
            return Division::NoParts;
        }

        let equal_part = self.0 / n;
        let mut parts = vec![Self(equal_part); (n - 1) as usize];
        parts.push(Self(self.0 - equal_part * (n - 1)));
        Division::Parts(parts)
    }

    /// Strictly greater than
    pub fn greater_than(&self, other: Money) -> bool {
        self.0 > other.0
    }

    /// Exactly equal
    pub fn equal_to(&self, other: Money) -> bool {
        self.0 == other.0
    }

    /// Largest of the given amounts; the first one seen wins ties
    pub fn max(values: &[Money]) -> Money {
        let mut iter = values.iter().copied();
        let first = iter.next().unwrap_or_default();
        iter.fold(first, |max, m| if m.greater_than(max) { m } else { max })
    }

    /// Smallest of the given amounts; the first one seen wins ties
    pub fn min(values: &[Money]) -> Money {
        let mut iter = values.iter().copied();
        let first = iter.next().unwrap_or_default();
        iter.fold(first, |min, m| if min.greater_than(m) { m } else { min })
    }

    /// Decimal value, for ratio reporting only
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Render with two fractional digits, negatives in parentheses
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.is_negative() {
            format!("({}.{:02})", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        };
        f.pad(&text)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
