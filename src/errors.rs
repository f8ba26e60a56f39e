// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the feescan library.
//!
//! Fee conversion is the only fallible operation in the crate. Validators
//! return partition results instead of failing, and batch processing degrades
//! per entry rather than surfacing an error for the whole call.

/// Errors that can occur when converting a native-unit withdrawal fee into a
/// fiat value.
///
/// All variants are invalid-argument failures: the converter was handed a
/// number it cannot price. Inside [`crate::TokenProcessor`] these are caught
/// per entry and downgraded to a skip; they only propagate to callers that
/// invoke the converters directly.
///
/// # Examples
///
/// ```
/// use feescan::{calculate_withdrawal_fee_inr, FeeConversionError};
///
/// let err = calculate_withdrawal_fee_inr(-0.1, 5_000_000.0).unwrap_err();
/// assert_eq!(err, FeeConversionError::NonPositiveFee { fee: -0.1 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FeeConversionError {
    /// The native withdrawal fee was zero or negative.
    ///
    /// Note the asymmetry with [`crate::validate_token_config`], which accepts
    /// a zero fee: a config can pass validation and still be skipped here.
    #[error("native withdrawal fee must be positive, got {fee}")]
    NonPositiveFee {
        /// The rejected fee value
        fee: f64,
    },

    /// The unit price was zero or negative.
    #[error("unit price must be positive, got {price}")]
    NonPositivePrice {
        /// The rejected price value
        price: f64,
    },

    /// The fee or price was NaN or infinite, or their product overflowed
    /// the representable range.
    #[error("fee conversion requires finite values, got {value}")]
    NonFiniteInput {
        /// The rejected value
        value: f64,
    },
}
