// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for fiat-denominated values.
//!
//! Newtype wrappers keep INR and USD amounts from being mixed with each other
//! or with raw native-unit fees:
//!
//! ```text
//! native fee (f64)
//!     |
//!     | × unit price, rounded per currency
//!     ↓
//! InrValue / UsdValue (f64, fiat-denominated)
//! ```

mod inr;
mod usd;

pub use inr::InrValue;
pub use usd::UsdValue;
