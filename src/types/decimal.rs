// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary-precision decimal type for balance amounts

use bigdecimal::{BigDecimal, ParseBigDecimalError, Zero};
use serde::{Deserialize, Serialize, Serializer};
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// An arbitrary-precision decimal amount
///
/// Balances arrive as decimal strings precisely so that no floating-point
/// rounding happens on the way in. This type keeps that guarantee: parsing
/// keeps every digit and the scale of the source string, and formatting a
/// parsed plain decimal gives the source string back.
///
/// Formatting is always plain positional notation, never exponential, and
/// serialization emits the same string.
///
/// Equality and ordering are numeric, so `1.50` equals `1.5`.
///
/// # Examples
///
/// ```
/// use balance_normalizer::PreciseDecimal;
///
/// let amount: PreciseDecimal = "123.456789012345".parse().unwrap();
/// assert_eq!(amount.to_string(), "123.456789012345");
///
/// let same: PreciseDecimal = "123.4567890123450".parse().unwrap();
/// assert_eq!(amount, same);
///
/// let dust: PreciseDecimal = "0.000000000000000001".parse().unwrap();
/// assert_eq!(dust.to_string(), "0.000000000000000001");
///
/// assert!("abc".parse::<PreciseDecimal>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct PreciseDecimal(BigDecimal);

impl PreciseDecimal {
    /// Wrap an existing `BigDecimal`
    pub const fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Zero
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// Borrow the inner `BigDecimal`
    pub const fn as_bigdecimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Unwrap into the inner `BigDecimal`
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }

    /// Check if the value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of digits after the decimal point, as written in the source
    ///
    /// ```
    /// use balance_normalizer::PreciseDecimal;
    ///
    /// let amount: PreciseDecimal = "200.250".parse().unwrap();
    /// assert_eq!(amount.scale(), 3);
    /// ```
    pub fn scale(&self) -> i64 {
        self.0.as_bigint_and_exponent().1
    }
}

impl FromStr for PreciseDecimal {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s).map(Self)
    }
}

impl From<BigDecimal> for PreciseDecimal {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<PreciseDecimal> for BigDecimal {
    fn from(value: PreciseDecimal) -> Self {
        value.0
    }
}

impl From<u64> for PreciseDecimal {
    fn from(value: u64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl Add for PreciseDecimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for PreciseDecimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for PreciseDecimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Sum for PreciseDecimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a PreciseDecimal> for PreciseDecimal {
    fn sum<I: Iterator<Item = &'a PreciseDecimal>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl Serialize for PreciseDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // BigDecimal's own Display switches to exponent form for small values
        f.write_str(&self.0.to_plain_string())
    }
}
