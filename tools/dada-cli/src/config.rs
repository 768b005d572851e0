//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use dada_commerce::catalog::SettingsUpdate;
use dada_i18n::Language;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["dada.toml", ".dada.toml", "dada.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Store settings overrides.
    #[serde(default)]
    pub store: SettingsUpdate,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Start from the reference catalog.
    #[serde(default = "default_true")]
    pub seed: bool,

    /// CSV of wilayas and communes (`code,name,commune` rows). Built-in list when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wilayas: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: true,
            wilayas: None,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Default display language.
    #[serde(default)]
    pub language: Language,

    /// Directory holding the identity store.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    ".dada".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            data_dir: default_data_dir(),
        }
    }
}

/// Generate a default dada.toml config file.
pub fn generate_default_config() -> String {
    r#"# GYM DADA storefront configuration

[store]
# contact_whatsapp = "+213555123456"
# home_delivery_price = 400
# office_delivery_price = 200

# [store.store_name]
# ar = "GYM DADA STORE"
# fr = "GYM DADA STORE"

[catalog]
seed = true
# wilayas = "wilayas.csv"

[session]
language = "ar"
data_dir = ".dada"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dada_commerce::Money;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.store.is_empty());
    }

    #[test]
    fn test_store_overrides() {
        let config: CliConfig = toml::from_str(
            r#"
            [store]
            contact_whatsapp = "+213770000000"
            home_delivery_price = 600

            [session]
            language = "fr"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.contact_whatsapp.as_deref(), Some("+213770000000"));
        assert_eq!(config.store.home_delivery_price, Some(Money::new(600)));
        assert_eq!(config.session.language, Language::Fr);
        assert_eq!(config.session.data_dir, ".dada");
        assert!(config.catalog.seed);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.catalog.seed = false;
        config.store.contact_phone = Some("0555".into());

        for name in ["dada.toml", "dada.json"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(CliConfig::load(&path).unwrap(), config);
        }
    }
}
