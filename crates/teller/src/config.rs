//! Teller configuration
//!
//! Defaults match the branch's fixed products: savings at 3.0%, checking with
//! a 200.0 overdraft limit. Values can be overridden from the environment or
//! a JSON file.

use crate::error::{TellerError, TellerResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

pub const ENV_SAVINGS_RATE: &str = "MINIBANK_SAVINGS_RATE";
pub const ENV_OVERDRAFT_LIMIT: &str = "MINIBANK_OVERDRAFT_LIMIT";
pub const ENV_JSON_RECEIPTS: &str = "MINIBANK_JSON_RECEIPTS";
pub const ENV_LOG_LEVEL: &str = "MINIBANK_LOG_LEVEL";

/// Teller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TellerConfig {
    /// Interest rate for new savings accounts, in percent
    pub savings_interest_rate: Decimal,
    /// Overdraft limit for new checking accounts
    pub checking_overdraft_limit: Decimal,
    /// Print receipts as one JSON line instead of the text block
    pub json_receipts: bool,
    pub log_level: String,
}

impl Default for TellerConfig {
    fn default() -> Self {
        Self {
            savings_interest_rate: Decimal::new(30, 1),
            checking_overdraft_limit: Decimal::new(200, 0),
            json_receipts: false,
            log_level: "warn".to_string(),
        }
    }
}

impl TellerConfig {
    /// Load config from environment variables, falling back to defaults.
    pub fn from_env() -> TellerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> TellerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SAVINGS_RATE) {
            config.savings_interest_rate = parse_var(ENV_SAVINGS_RATE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_OVERDRAFT_LIMIT) {
            config.checking_overdraft_limit = parse_var(ENV_OVERDRAFT_LIMIT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_JSON_RECEIPTS) {
            config.json_receipts = parse_var(ENV_JSON_RECEIPTS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            config.log_level = raw;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> TellerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TellerError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            TellerError::config(format!("invalid config {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TellerResult<()> {
        if self.checking_overdraft_limit < Decimal::ZERO {
            return Err(TellerError::config(format!(
                "overdraft limit must be non-negative: {}",
                self.checking_overdraft_limit
            )));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> TellerResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| TellerError::config(format!("{}: cannot parse {:?}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TellerConfig::default();
        assert_eq!(config.savings_interest_rate, dec!(3.0));
        assert_eq!(config.checking_overdraft_limit, dec!(200));
        assert!(!config.json_receipts);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = TellerConfig::from_lookup(lookup_from(&[
            (ENV_SAVINGS_RATE, "4.5"),
            (ENV_JSON_RECEIPTS, "true"),
        ]))
        .unwrap();

        assert_eq!(config.savings_interest_rate, dec!(4.5));
        assert_eq!(config.checking_overdraft_limit, dec!(200));
        assert!(config.json_receipts);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = TellerConfig::from_lookup(lookup_from(&[(ENV_OVERDRAFT_LIMIT, "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_OVERDRAFT_LIMIT));
    }

    #[test]
    fn test_negative_overdraft_rejected() {
        let err = TellerConfig::from_lookup(lookup_from(&[(ENV_OVERDRAFT_LIMIT, "-1")]))
            .unwrap_err();
        assert!(matches!(err, TellerError::Config(_)));
    }
}
