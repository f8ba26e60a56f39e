// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Withdrawal-fee conversion from native units into fiat values.
//!
//! Both converters are pure functions of their two numeric inputs. Rounding is
//! half-away-from-zero ([`f64::round`] semantics) applied to
//! `value * 10^n / 10^n`, with a fixed decimal count per currency: 2 places
//! for INR, 8 places for USD.

use crate::errors::FeeConversionError;
use crate::types::{InrValue, UsdValue};

/// Decimal places kept when rounding an INR fee.
pub const INR_FEE_DECIMALS: u32 = 2;

/// Decimal places kept when rounding a USD fee.
pub const USD_FEE_DECIMALS: u32 = 8;

fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn check_fee_inputs(native_fee: f64, unit_price: f64) -> Result<(), FeeConversionError> {
    if !native_fee.is_finite() {
        return Err(FeeConversionError::NonFiniteInput { value: native_fee });
    }
    if !unit_price.is_finite() {
        return Err(FeeConversionError::NonFiniteInput { value: unit_price });
    }
    if native_fee <= 0.0 {
        return Err(FeeConversionError::NonPositiveFee { fee: native_fee });
    }
    if unit_price <= 0.0 {
        return Err(FeeConversionError::NonPositivePrice { price: unit_price });
    }
    Ok(())
}

/// Convert a native-unit withdrawal fee into INR, rounded to 2 decimal places.
///
/// Fails when either input is non-positive or non-finite, or when the
/// product overflows the representable range.
///
/// # Examples
///
/// ```
/// use feescan::{calculate_withdrawal_fee_inr, InrValue};
///
/// let fee = calculate_withdrawal_fee_inr(0.0005, 5_000_000.0)?;
/// assert_eq!(fee, InrValue::new(2500.0));
/// # Ok::<(), feescan::FeeConversionError>(())
/// ```
pub fn calculate_withdrawal_fee_inr(
    native_fee: f64,
    unit_price_inr: f64,
) -> Result<InrValue, FeeConversionError> {
    check_fee_inputs(native_fee, unit_price_inr)?;
    let fee = round_to_decimals(native_fee * unit_price_inr, INR_FEE_DECIMALS);
    if !fee.is_finite() {
        return Err(FeeConversionError::NonFiniteInput { value: fee });
    }
    Ok(InrValue::new(fee))
}

/// Convert a native-unit withdrawal fee into USD, rounded to 8 decimal places.
///
/// The extra precision relative to INR keeps sub-cent fees for cheap tokens
/// from collapsing to zero.
///
/// # Examples
///
/// ```
/// use feescan::{calculate_withdrawal_fee_usd, UsdValue};
///
/// let fee = calculate_withdrawal_fee_usd(0.0005, 60_000.0)?;
/// assert_eq!(fee, UsdValue::new(30.0));
/// # Ok::<(), feescan::FeeConversionError>(())
/// ```
pub fn calculate_withdrawal_fee_usd(
    native_fee: f64,
    unit_price_usd: f64,
) -> Result<UsdValue, FeeConversionError> {
    check_fee_inputs(native_fee, unit_price_usd)?;
    let fee = round_to_decimals(native_fee * unit_price_usd, USD_FEE_DECIMALS);
    if !fee.is_finite() {
        return Err(FeeConversionError::NonFiniteInput { value: fee });
    }
    Ok(UsdValue::new(fee))
}
