use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Engine settings persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Length of the trailing history window, in calendar months.
    #[serde(default = "Config::default_history_months")]
    pub history_months: u32,
    #[serde(default = "Config::default_confidence_interval")]
    pub confidence_interval: u8,
    /// Relative half-width of the forecast band (0.15 = ±15%).
    #[serde(default = "Config::default_confidence_band")]
    pub confidence_band: Decimal,
    #[serde(default = "Config::default_max_months_to_project")]
    pub max_months_to_project: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Snapshot file used when the CLI is not given `--store`.
    pub default_store: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            history_months: Self::default_history_months(),
            confidence_interval: Self::default_confidence_interval(),
            confidence_band: Self::default_confidence_band(),
            max_months_to_project: Self::default_max_months_to_project(),
            default_store: None,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "TRY".into()
    }

    pub fn default_history_months() -> u32 {
        6
    }

    pub fn default_confidence_interval() -> u8 {
        85
    }

    pub fn default_confidence_band() -> Decimal {
        Decimal::new(15, 2)
    }

    pub fn default_max_months_to_project() -> u32 {
        120
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        if self.history_months == 0 {
            return Err(ConfigError::Invalid(
                "history_months must be at least 1".into(),
            ));
        }
        if self.confidence_interval == 0 || self.confidence_interval > 100 {
            return Err(ConfigError::Invalid(format!(
                "confidence_interval must be within 1..=100, got {}",
                self.confidence_interval
            )));
        }
        if self.confidence_band < Decimal::ZERO || self.confidence_band >= Decimal::ONE {
            return Err(ConfigError::Invalid(format!(
                "confidence_band must be within 0..1, got {}",
                self.confidence_band
            )));
        }
        if self.max_months_to_project == 0 {
            return Err(ConfigError::Invalid(
                "max_months_to_project must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn resolve_default_store(&self) -> PathBuf {
        if let Some(path) = &self.default_store {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("finsight").join("snapshot.json")
    }
}
