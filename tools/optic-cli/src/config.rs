//! CLI configuration.

use anyhow::{Context, Result};
use optic_commerce::inquiry::DEFAULT_QUOTE_PREFIX;
use optic_commerce::Currency;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Quote request settings.
    #[serde(default)]
    pub quote: QuoteConfig,

    /// Log filter settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storefront metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Quote currency (ISO code).
    #[serde(default)]
    pub currency: Currency,
}

fn default_store_name() -> String {
    "Hamza Opticals".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: Currency::default(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file replacing the built-in products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Quote configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Prefix for generated quote ids.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_id_prefix() -> String {
    DEFAULT_QUOTE_PREFIX.to_string()
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Generate a default optic.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Optical storefront configuration

[store]
name = "{name}"
currency = "USD"

[catalog]
# JSON file with {{ "currency": "USD", "products": [...] }}
# path = "catalog.json"

[quote]
id_prefix = "{prefix}"

[logging]
level = "info"
"#,
        name = name,
        prefix = DEFAULT_QUOTE_PREFIX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("Vision Wholesale")).unwrap();
        assert_eq!(config.store.name, "Vision Wholesale");
        assert_eq!(config.store.currency, Currency::USD);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.quote.id_prefix, "HO-QUOTE");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CliConfig = toml::from_str("[store]\ncurrency = \"PKR\"\n").unwrap();
        assert_eq!(config.store.currency, Currency::PKR);
        assert_eq!(config.store.name, "Hamza Opticals");
        assert_eq!(config.quote.id_prefix, "HO-QUOTE");
    }
}
