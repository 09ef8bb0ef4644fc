use crate::core::currency::CurrencyCode;
use crate::core::rates::{RateEntry, RateTable};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_currency() -> CurrencyCode {
    CurrencyCode::euro()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Target currency used when none is given on the command line
    #[serde(default = "default_currency")]
    pub currency: CurrencyCode,
    /// Extra rates layered over the built-in table
    #[serde(default)]
    pub rates: Vec<RateEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency: default_currency(),
            rates: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Built-in rates with the configured ones applied on top.
    pub fn rate_table(&self) -> RateTable {
        RateTable::layered(RateTable::default_table(), self.rates.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
currency: "usd"
rates:
  - from: "SEK"
    to: "EUR"
    rate: 0.088
  - from: "usd"
    to: "eur"
    rate: 0.9
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.currency.as_str(), "USD");
        assert_eq!(config.rates.len(), 2);
        assert_eq!(config.rates[0].from.as_str(), "SEK");
        assert_eq!(config.rates[0].rate, Decimal::new(88, 3));
        assert_eq!(config.rates[1].to.as_str(), "EUR");

        let table = config.rate_table();
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.rate(&"USD".parse().unwrap(), &"EUR".parse().unwrap()),
            Some(Decimal::new(9, 1))
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.currency.as_str(), "EUR");
        assert!(config.rates.is_empty());
        assert_eq!(config.rate_table(), *RateTable::default_table());
    }

    #[test]
    fn test_invalid_currency_is_rejected() {
        let yaml_str = r#"
currency: "euros"
"#;
        assert!(serde_yaml::from_str::<AppConfig>(yaml_str).is_err());
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/nonexistent/fxconv/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
