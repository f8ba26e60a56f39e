// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token price quotes and the by-symbol lookup built from them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current unit price of a token in INR and USD.
///
/// Quotes arrive as a sequence from an external price feed; a symbol may
/// appear more than once when the feed repeats itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    /// Ticker symbol the quote applies to
    pub symbol: String,
    /// Price of one unit in Indian Rupees
    #[serde(rename = "priceINR")]
    pub price_inr: f64,
    /// Price of one unit in US Dollars
    #[serde(rename = "priceUSD")]
    pub price_usd: f64,
}

/// By-symbol price lookup built once per processing call.
///
/// Construction scans the quote sequence in order; a later quote for the same
/// symbol overwrites an earlier one, so the book always holds the last quote
/// seen per symbol.
///
/// # Examples
///
/// ```
/// use feescan::{PriceBook, TokenPrice};
///
/// let quotes = vec![
///     TokenPrice { symbol: "BTC".into(), price_inr: 4_900_000.0, price_usd: 59_000.0 },
///     TokenPrice { symbol: "BTC".into(), price_inr: 5_000_000.0, price_usd: 60_000.0 },
/// ];
///
/// let book = PriceBook::from_quotes(&quotes);
/// assert_eq!(book.len(), 1);
/// assert_eq!(book.get("BTC").unwrap().price_usd, 60_000.0);
/// ```
#[derive(Debug, Clone)]
pub struct PriceBook<'a>(HashMap<&'a str, &'a TokenPrice>);

impl<'a> PriceBook<'a> {
    /// Build a lookup from a quote sequence, last write per symbol winning
    pub fn from_quotes(quotes: &'a [TokenPrice]) -> Self {
        let mut book = HashMap::with_capacity(quotes.len());
        for quote in quotes {
            book.insert(quote.symbol.as_str(), quote);
        }
        Self(book)
    }

    /// Look up the quote for a symbol
    pub fn get(&self, symbol: &str) -> Option<&'a TokenPrice> {
        self.0.get(symbol).copied()
    }

    /// Number of distinct symbols with a quote
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the book holds no quotes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
