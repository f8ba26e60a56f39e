// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Withdrawal-fee estimation for token listings.
//!
//! Given token configurations (native-unit withdrawal fees) and price quotes
//! (INR/USD per unit), this crate joins the two, derives fiat-denominated
//! fees with fixed per-currency rounding, validates configuration records,
//! and renders display strings with locale-style digit grouping.

mod config;
mod errors;
mod fees;
mod format;
mod observer;
mod price;
mod processor;
mod types;

pub use config::*;
pub use errors::*;
pub use fees::*;
pub use format::*;
pub use observer::*;
pub use price::*;
pub use processor::*;
pub use types::*;
