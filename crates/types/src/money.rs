//! Fixed-point monetary type for the ledger.
//!
//! All balances, asset values, debts and transaction amounts use fixed-point
//! arithmetic with 2 decimal places. Every currency total the valuation
//! algorithm produces is defined as rounded to 2 decimals, so the rounding
//! rule and the representation coincide: converting a computed `f64` into
//! `Cash` *is* the rounding step.

use derive_more::{Add, AddAssign, From, Into, Neg, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-point scale for `Cash`. 100 = 1.00 kr, 1 = 0.01 kr.
pub const CASH_SCALE: i64 = 100;

/// Fixed-point cash amount with 2 decimal places.
///
/// # Examples
/// - `Cash(100)` = 1.00 kr
/// - `Cash(150)` = 1.50 kr
/// - `Cash(1)` = 0.01 kr
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Cash(pub i64);

impl Cash {
    pub const ZERO: Cash = Cash(0);

    /// Create `Cash` from a floating-point value, rounding to 2 decimals.
    #[inline]
    pub fn from_float(v: f64) -> Self {
        Self((v * CASH_SCALE as f64).round() as i64)
    }

    /// Convert to floating-point for calculations and display.
    #[inline]
    pub fn to_float(self) -> f64 {
        self.0 as f64 / CASH_SCALE as f64
    }

    /// Raw internal value (hundredths).
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Check if the amount is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Check if the amount is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Cash(self.0.abs())
    }

    /// Larger of two amounts.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Cash(self.0.max(other.0))
    }
}

impl fmt::Debug for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cash({:.2} kr)", self.to_float())
    }
}

impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kr", self.to_float())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_from_float() {
        assert_eq!(Cash::from_float(1.0), Cash(100));
        assert_eq!(Cash::from_float(1.50), Cash(150));
        assert_eq!(Cash::from_float(0.01), Cash(1));
        assert_eq!(Cash::from_float(15_000.0), Cash(1_500_000));
    }

    #[test]
    fn test_cash_rounds_to_two_decimals() {
        assert_eq!(Cash::from_float(1.005), Cash(101));
        assert_eq!(Cash::from_float(1.004), Cash(100));
        assert_eq!(Cash::from_float(-2.675), Cash(-268));
    }

    #[test]
    fn test_cash_to_float() {
        assert!((Cash(100).to_float() - 1.0).abs() < 1e-10);
        assert!((Cash(1_234).to_float() - 12.34).abs() < 1e-10);
    }

    #[test]
    fn test_cash_arithmetic() {
        let a = Cash::from_float(1_000.0);
        let b = Cash::from_float(250.0);

        assert_eq!((a - b).to_float(), 750.0);
        assert_eq!((a + b).to_float(), 1_250.0);
        assert_eq!(-b, Cash::from_float(-250.0));
        assert!(a.is_positive());
        assert!((-a).is_negative());
    }

    #[test]
    fn test_cash_sum() {
        let total: Cash = [Cash(100), Cash(250), Cash(3)].into_iter().sum();
        assert_eq!(total, Cash(353));
    }

    #[test]
    fn test_cash_display() {
        assert_eq!(Cash::from_float(1_166.4).to_string(), "1166.40 kr");
        assert_eq!(Cash::ZERO.to_string(), "0.00 kr");
    }
}
