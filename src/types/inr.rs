// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! INR value type for financial calculations

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Represents an INR-denominated value
///
/// This type provides type safety for financial calculations involving Indian
/// Rupee values, preventing confusion with USD values or raw native-unit fees.
///
/// # Examples
///
/// ```
/// use feescan::InrValue;
///
/// let fee = InrValue::new(2500.0);
/// assert_eq!(fee.to_string(), "₹2,500.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InrValue(f64);

impl InrValue {
    /// Zero INR value
    pub const ZERO: Self = Self(0.0);

    /// Create a new INR value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }

    /// Get absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Format as a locale-style INR string with Indian digit grouping
    ///
    /// # Examples
    ///
    /// ```
    /// use feescan::InrValue;
    ///
    /// let value = InrValue::new(1234567.89);
    /// assert_eq!(value.format(), "₹12,34,567.89");
    /// ```
    pub fn format(&self) -> String {
        crate::format_currency_inr(self.0)
    }
}

impl From<f64> for InrValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for InrValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for InrValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::fmt::Display for InrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format_currency_inr(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_value_creation() {
        let value = InrValue::new(100.50);
        assert_eq!(value.as_f64(), 100.50);
    }

    #[test]
    fn test_inr_value_zero() {
        assert!(InrValue::ZERO.is_zero());
        assert!(InrValue::new(0.0).is_zero());
        assert!(!InrValue::new(0.1).is_zero());
    }

    #[test]
    fn test_inr_value_arithmetic() {
        let val1 = InrValue::new(100.0);
        let val2 = InrValue::new(50.0);

        assert_eq!((val1 + val2).as_f64(), 150.0);
        assert_eq!((val1 - val2).as_f64(), 50.0);
    }

    #[test]
    fn test_inr_value_abs() {
        assert_eq!(InrValue::new(-100.0).abs().as_f64(), 100.0);
        assert_eq!(InrValue::new(100.0).abs().as_f64(), 100.0);
    }

    #[test]
    fn test_display_uses_indian_grouping() {
        let value = InrValue::new(1234567.89);
        assert_eq!(format!("{}", value), "₹12,34,567.89");
    }

    #[test]
    fn test_ordering() {
        assert!(InrValue::new(1.0) < InrValue::new(2.0));
    }

    #[test]
    fn test_serialization() {
        let value = InrValue::new(100.50);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "100.5");
        let deserialized: InrValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, deserialized);
    }

    #[test]
    fn test_conversions() {
        let inr: InrValue = 100.50.into();
        assert_eq!(inr.as_f64(), 100.50);
    }
}
