use aims_order::ShippingConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub shipping: ShippingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Path of the SQLite file holding media and the cart
    pub path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Developer-local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `AIMS_SHIPPING__AMOUNT_MULTIPLIER=5`
            .add_source(config::Environment::with_prefix("AIMS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> Result<Config, config::ConfigError> {
        config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_shipping_defaults_when_section_missing() {
        let cfg = from_toml("[database]\npath = \"aims.db\"\n").unwrap();
        assert_eq!(cfg.database.path, "aims.db");
        assert_eq!(cfg.shipping.surcharge_percent, 10);
        assert_eq!(cfg.shipping.amount_multiplier, 10);
    }

    #[test]
    fn test_shipping_override() {
        let cfg = from_toml(
            "[database]\npath = \"x.db\"\n[shipping]\namount_multiplier = 3\n",
        )
        .unwrap();
        assert_eq!(cfg.shipping.amount_multiplier, 3);
        assert_eq!(cfg.shipping.surcharge_percent, 10);
    }

    #[test]
    fn test_database_section_required() {
        assert!(from_toml("[shipping]\nsurcharge_percent = 5\n").is_err());
    }
}
