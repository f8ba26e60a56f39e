// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! USD value type for financial calculations

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Represents a USD-denominated value
///
/// This type provides type safety for financial calculations involving USD
/// values, preventing confusion with INR values or raw native-unit fees.
///
/// # Examples
///
/// ```
/// use feescan::UsdValue;
///
/// let fee = UsdValue::new(30.0);
/// assert_eq!(fee.to_string(), "$30.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdValue(f64);

impl UsdValue {
    /// Zero USD value
    pub const ZERO: Self = Self(0.0);

    /// Create a new USD value
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

    /// Format as a locale-style USD string
    ///
    /// Keeps between 2 and 8 fraction digits, trimming trailing zeros beyond
    /// the minimum so small crypto-denominated fees stay readable.
    ///
    /// # Examples
    ///
    /// ```
    /// use feescan::UsdValue;
    ///
    /// assert_eq!(UsdValue::new(1234.5).format(), "$1,234.50");
    /// assert_eq!(UsdValue::new(0.00012345).format(), "$0.00012345");
    /// ```
    pub fn format(&self) -> String {
        crate::format_currency_usd(self.0)
    }
}

impl From<f64> for UsdValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for UsdValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for UsdValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format_currency_usd(self.0))
    }
}
