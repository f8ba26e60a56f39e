// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token configuration records and their validation.
//!
//! Configurations arrive from an external source keyed by a token identifier.
//! [`TokenConfigMap`] preserves the order in which the caller supplied them;
//! that order is the order the processor and validator walk the entries.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// Configuration for a single listed token.
///
/// `withdrawal_fee` is denominated in the token's own native unit, prior to
/// any fiat conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    /// Human-readable token name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Withdrawal fee in native units
    pub withdrawal_fee: f64,
}

/// Insertion-ordered mapping of token key to [`TokenConfig`]
///
/// Keys are unique; inserting an existing key replaces the config in place
/// without moving it. Iteration order is insertion order, which makes batch
/// results reproducible for a given input.
///
/// Serializes as a JSON object keyed by token identifier, matching the shape
/// configuration sources deliver.
///
/// # Examples
///
/// ```
/// use feescan::{TokenConfig, TokenConfigMap};
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
///
/// assert_eq!(configs.len(), 1);
/// assert!(configs.get("BTC").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenConfigMap(Vec<(String, TokenConfig)>);

impl TokenConfigMap {
    /// Create a new empty config map
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a config under a token key.
    ///
    /// Returns the previous config if the key was already present; the entry
    /// keeps its original position in that case.
    pub fn insert(&mut self, key: impl Into<String>, config: TokenConfig) -> Option<TokenConfig> {
        let key = key.into();
        // Linear scan: config maps hold one entry per listed token
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| *existing == key) {
            return Some(std::mem::replace(&mut slot.1, config));
        }
        self.0.push((key, config));
        None
    }

    /// Look up a config by token key
    pub fn get(&self, key: &str) -> Option<&TokenConfig> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, config)| config)
    }

    /// Number of entries in the map
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenConfig)> {
        self.0.iter().map(|(key, config)| (key.as_str(), config))
    }
}

impl FromIterator<(String, TokenConfig)> for TokenConfigMap {
    fn from_iter<T: IntoIterator<Item = (String, TokenConfig)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, config) in iter {
            map.insert(key, config);
        }
        map
    }
}

impl IntoIterator for TokenConfigMap {
    type Item = (String, TokenConfig);
    type IntoIter = std::vec::IntoIter<(String, TokenConfig)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenConfigMap {
    type Item = &'a (String, TokenConfig);
    type IntoIter = std::slice::Iter<'a, (String, TokenConfig)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for TokenConfigMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenConfigMap({} tokens)", self.len())
    }
}

impl Serialize for TokenConfigMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, config) in &self.0 {
            map.serialize_entry(key, config)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TokenConfigMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigMapVisitor;

        impl<'de> Visitor<'de> for ConfigMapVisitor {
            type Value = TokenConfigMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of token key to token config")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut configs = TokenConfigMap::new();
                while let Some((key, config)) = access.next_entry::<String, TokenConfig>()? {
                    configs.insert(key, config);
                }
                Ok(configs)
            }
        }

        deserializer.deserialize_map(ConfigMapVisitor)
    }
}

/// Partition of a config map into valid configs and the keys of invalid ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Configs that passed validation, in map iteration order
    pub valid: Vec<TokenConfig>,
    /// Keys of configs that failed validation
    pub invalid: Vec<String>,
}

/// Check structural and value validity of a single token configuration.
///
/// A config is invalid when `name` or `symbol` is empty, when the fee is not
/// an actual number (NaN or infinite), or when the fee is negative.
///
/// A zero fee is accepted here even though the fee converter rejects it at
/// conversion time; such a config validates and is later skipped by the
/// processor. This asymmetry is intentional and kept observable.
///
/// # Examples
///
/// ```
/// use feescan::{validate_token_config, TokenConfig};
///
/// let config = TokenConfig {
///     name: "Bitcoin".into(),
///     symbol: "BTC".into(),
///     withdrawal_fee: 0.0,
/// };
/// assert!(validate_token_config(&config));
///
/// let negative = TokenConfig { withdrawal_fee: -0.1, ..config };
/// assert!(!validate_token_config(&negative));
/// ```
pub fn validate_token_config(config: &TokenConfig) -> bool {
    if config.name.is_empty() || config.symbol.is_empty() {
        return false;
    }
    if !config.withdrawal_fee.is_finite() {
        return false;
    }
    if config.withdrawal_fee < 0.0 {
        return false;
    }
    true
}

/// Partition a config map by [`validate_token_config`].
///
/// `valid` preserves map iteration order; `invalid` holds only the offending
/// keys. Each invalid entry is logged at warning level with the key and the
/// raw config so the rejection can be diagnosed.
pub fn validate_token_configs(configs: &TokenConfigMap) -> ValidationResult {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for (key, config) in configs.iter() {
        if validate_token_config(config) {
            valid.push(config.clone());
        } else {
            warn!(token = %key, config = ?config, "invalid token configuration");
            invalid.push(key.to_string());
        }
    }

    ValidationResult { valid, invalid }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str, symbol: &str, fee: f64) -> TokenConfig {
        TokenConfig {
            name: name.to_string(),
            symbol: symbol.to_string(),
            withdrawal_fee: fee,
        }
    }

    #[test]
    fn test_config_map_insert_and_get() {
        let mut configs = TokenConfigMap::new();
        assert!(configs.is_empty());

        assert!(configs.insert("BTC", config("Bitcoin", "BTC", 0.0005)).is_none());
        assert_eq!(configs.len(), 1);
        assert_eq!(configs.get("BTC").unwrap().name, "Bitcoin");
        assert!(configs.get("ETH").is_none());
    }

    #[test]
    fn test_config_map_insert_replaces_in_place() {
        let mut configs = TokenConfigMap::new();
        configs.insert("BTC", config("Bitcoin", "BTC", 0.0005));
        configs.insert("ETH", config("Ethereum", "ETH", 0.01));

        let previous = configs.insert("BTC", config("Bitcoin", "BTC", 0.001));
        assert_eq!(previous.unwrap().withdrawal_fee, 0.0005);

        // Replacement keeps the original position
        let keys: Vec<&str> = configs.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["BTC", "ETH"]);
        assert_eq!(configs.get("BTC").unwrap().withdrawal_fee, 0.001);
    }

    #[test]
    fn test_config_map_preserves_insertion_order() {
        let mut configs = TokenConfigMap::new();
        configs.insert("ZEC", config("Zcash", "ZEC", 0.001));
        configs.insert("ADA", config("Cardano", "ADA", 1.0));
        configs.insert("BTC", config("Bitcoin", "BTC", 0.0005));

        let keys: Vec<&str> = configs.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["ZEC", "ADA", "BTC"]);
    }

    #[test]
    fn test_config_map_from_iter_dedups_keys() {
        let configs: TokenConfigMap = vec![
            ("BTC".to_string(), config("Bitcoin", "BTC", 0.0005)),
            ("BTC".to_string(), config("Bitcoin", "BTC", 0.001)),
        ]
        .into_iter()
        .collect();

        assert_eq!(configs.len(), 1);
        assert_eq!(configs.get("BTC").unwrap().withdrawal_fee, 0.001);
    }

    #[test]
    fn test_config_map_display() {
        let mut configs = TokenConfigMap::new();
        assert_eq!(format!("{}", configs), "TokenConfigMap(0 tokens)");
        configs.insert("BTC", config("Bitcoin", "BTC", 0.0005));
        assert_eq!(format!("{}", configs), "TokenConfigMap(1 tokens)");
    }

    #[test]
    fn test_config_map_serde_round_trip_keeps_order() {
        let json = r#"{
            "ZEC": {"name": "Zcash", "symbol": "ZEC", "withdrawalFee": 0.001},
            "BTC": {"name": "Bitcoin", "symbol": "BTC", "withdrawalFee": 0.0005}
        }"#;

        let configs: TokenConfigMap = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = configs.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["ZEC", "BTC"]);

        let serialized = serde_json::to_string(&configs).unwrap();
        let reparsed: TokenConfigMap = serde_json::from_str(&serialized).unwrap();
        assert_eq!(configs, reparsed);
    }

    #[test]
    fn test_token_config_camel_case_fields() {
        let json = r#"{"name": "Bitcoin", "symbol": "BTC", "withdrawalFee": 0.0005}"#;
        let parsed: TokenConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.withdrawal_fee, 0.0005);
    }

    #[test]
    fn test_validate_accepts_ordinary_config() {
        assert!(validate_token_config(&config("Bitcoin", "BTC", 0.0005)));
    }

    #[test]
    fn test_validate_rejects_empty_name_or_symbol() {
        assert!(!validate_token_config(&config("", "BTC", 0.0005)));
        assert!(!validate_token_config(&config("Bitcoin", "", 0.0005)));
    }

    #[test]
    fn test_validate_rejects_negative_fee() {
        assert!(!validate_token_config(&config("Bitcoin", "BTC", -0.0005)));
    }

    #[test]
    fn test_validate_rejects_non_finite_fee() {
        assert!(!validate_token_config(&config("Bitcoin", "BTC", f64::NAN)));
        assert!(!validate_token_config(&config(
            "Bitcoin",
            "BTC",
            f64::INFINITY
        )));
    }

    #[test]
    fn test_validate_accepts_zero_fee() {
        // Zero passes validation even though conversion later rejects it
        assert!(validate_token_config(&config("Bitcoin", "BTC", 0.0)));
    }

    #[test]
    fn test_validate_configs_partitions_in_order() {
        let mut configs = TokenConfigMap::new();
        configs.insert("BTC", config("Bitcoin", "BTC", 0.0005));
        configs.insert("BAD", config("", "BAD", 0.1));
        configs.insert("ETH", config("Ethereum", "ETH", 0.01));
        configs.insert("NEG", config("Negative", "NEG", -1.0));

        let result = validate_token_configs(&configs);

        let valid_symbols: Vec<&str> =
            result.valid.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(valid_symbols, vec!["BTC", "ETH"]);
        assert_eq!(result.invalid, vec!["BAD", "NEG"]);
    }

    #[test]
    fn test_validate_configs_empty_map() {
        let result = validate_token_configs(&TokenConfigMap::new());
        assert!(result.valid.is_empty());
        assert!(result.invalid.is_empty());
    }
}
