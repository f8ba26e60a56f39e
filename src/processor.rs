// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Batch processing: join configs against quotes and derive fiat fees.

use serde::{Deserialize, Serialize};

use crate::config::TokenConfigMap;
use crate::fees::{calculate_withdrawal_fee_inr, calculate_withdrawal_fee_usd};
use crate::observer::{SkipObserver, TracingObserver};
use crate::price::{PriceBook, TokenPrice};
use crate::types::{InrValue, UsdValue};

/// A token with its withdrawal fee resolved into both fiat currencies.
///
/// `id` is the key the config was filed under in the [`TokenConfigMap`];
/// `symbol` comes from the config record itself. The two can differ and both
/// are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedToken {
    /// Token key from the config map
    pub id: String,
    /// Human-readable token name
    pub name: String,
    /// Ticker symbol from the config record
    pub symbol: String,
    /// Unit price in INR, from the matched quote
    #[serde(rename = "priceINR")]
    pub price_inr: InrValue,
    /// Unit price in USD, from the matched quote
    #[serde(rename = "priceUSD")]
    pub price_usd: UsdValue,
    /// Withdrawal fee in native units
    pub withdrawal_fee_native: f64,
    /// Withdrawal fee in INR, rounded to 2 decimals
    #[serde(rename = "withdrawalFeeINR")]
    pub withdrawal_fee_inr: InrValue,
    /// Withdrawal fee in USD, rounded to 8 decimals
    #[serde(rename = "withdrawalFeeUSD")]
    pub withdrawal_fee_usd: UsdValue,
}

/// Joins token configs against price quotes and derives fiat withdrawal fees.
///
/// Processing is a pure synchronous transform over caller-supplied inputs; a
/// processor holds no state between calls beyond its observer, so one
/// instance can serve concurrent independent calls.
///
/// # Examples
///
/// ```
/// use feescan::{TokenConfig, TokenConfigMap, TokenPrice, TokenProcessor};
///
/// let mut configs = TokenConfigMap::new();
/// configs.insert(
///     "BTC",
///     TokenConfig {
///         name: "Bitcoin".into(),
///         symbol: "BTC".into(),
///         withdrawal_fee: 0.0005,
///     },
/// );
/// let prices = vec![TokenPrice {
///     symbol: "BTC".into(),
///     price_inr: 5_000_000.0,
///     price_usd: 60_000.0,
/// }];
///
/// let processed = TokenProcessor::new().process_token_data(&configs, &prices);
/// assert_eq!(processed.len(), 1);
/// assert_eq!(processed[0].id, "BTC");
/// assert_eq!(processed[0].withdrawal_fee_inr.as_f64(), 2500.0);
/// assert_eq!(processed[0].withdrawal_fee_usd.as_f64(), 30.0);
/// ```
pub struct TokenProcessor {
    observer: Box<dyn SkipObserver>,
}

impl TokenProcessor {
    /// Create a processor reporting skips through `tracing`
    pub fn new() -> Self {
        Self {
            observer: Box::new(TracingObserver),
        }
    }

    /// Create a processor with a custom skip observer
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let processor = TokenProcessor::with_observer(Box::new(my_observer));
    /// ```
    pub fn with_observer(observer: Box<dyn SkipObserver>) -> Self {
        Self { observer }
    }

    /// Join configs against quotes and derive fiat withdrawal fees.
    ///
    /// Configs are walked in map insertion order. An entry is skipped (and
    /// reported to the observer) when no quote exists for its *map key*, or
    /// when fee conversion rejects its inputs; one bad entry never aborts the
    /// batch. The result is sorted ascending by INR withdrawal fee and may be
    /// empty — that is a valid, non-error outcome.
    pub fn process_token_data(
        &self,
        configs: &TokenConfigMap,
        prices: &[TokenPrice],
    ) -> Vec<ProcessedToken> {
        let book = PriceBook::from_quotes(prices);
        let mut processed = Vec::with_capacity(configs.len());

        for (key, config) in configs.iter() {
            // The lookup is keyed by quote symbol, matched against the map
            // key, not config.symbol
            let Some(quote) = book.get(key) else {
                self.observer.missing_price(key);
                continue;
            };

            let converted = calculate_withdrawal_fee_inr(config.withdrawal_fee, quote.price_inr)
                .and_then(|fee_inr| {
                    calculate_withdrawal_fee_usd(config.withdrawal_fee, quote.price_usd)
                        .map(|fee_usd| (fee_inr, fee_usd))
                });

            match converted {
                Ok((withdrawal_fee_inr, withdrawal_fee_usd)) => {
                    processed.push(ProcessedToken {
                        id: key.to_string(),
                        name: config.name.clone(),
                        symbol: config.symbol.clone(),
                        price_inr: InrValue::new(quote.price_inr),
                        price_usd: UsdValue::new(quote.price_usd),
                        withdrawal_fee_native: config.withdrawal_fee,
                        withdrawal_fee_inr,
                        withdrawal_fee_usd,
                    });
                }
                Err(error) => self.observer.conversion_failed(key, &error),
            }
        }

        processed.sort_by(|a, b| {
            a.withdrawal_fee_inr
                .as_f64()
                .total_cmp(&b.withdrawal_fee_inr.as_f64())
        });
        processed
    }
}

impl Default for TokenProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Process configs and quotes with the default `tracing` observer.
///
/// Convenience wrapper around [`TokenProcessor::process_token_data`].
pub fn process_token_data(
    configs: &TokenConfigMap,
    prices: &[TokenPrice],
) -> Vec<ProcessedToken> {
    TokenProcessor::new().process_token_data(configs, prices)
}
