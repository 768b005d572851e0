//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use dada_auth::IdentityStore;
use dada_commerce::catalog::{CatalogStore, StoreSettings};
use dada_commerce::checkout::WilayaDirectory;
use dada_i18n::Language;
use dada_kv::{FileBackend, Store};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// File inside the data directory holding users and the signed-in user.
const IDENTITY_FILE: &str = "identity.json";

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Display language, from `--lang` or the config.
    pub language: Language,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, language: Option<Language>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };
        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        let language = language.unwrap_or(config.session.language);
        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            language,
        })
    }

    /// Build the catalog: the reference data or an empty one, with `[store]` applied.
    pub fn catalog(&self) -> CatalogStore {
        let mut catalog = if self.config.catalog.seed {
            CatalogStore::seeded()
        } else {
            CatalogStore::new(StoreSettings::default())
        };
        catalog.update_settings(self.config.store.clone());
        catalog
    }

    /// Wilaya directory from the configured CSV, or the built-in list.
    pub fn wilayas(&self) -> Result<WilayaDirectory> {
        match &self.config.catalog.wilayas {
            Some(path) => {
                let path = self.resolve_path(path);
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read wilaya list: {}", path.display()))?;
                WilayaDirectory::from_csv(&text)
                    .with_context(|| format!("Failed to parse wilaya list: {}", path.display()))
            }
            None => Ok(WilayaDirectory::builtin()),
        }
    }

    /// Open the persisted identity store.
    pub fn identity(&self) -> Result<IdentityStore<FileBackend>> {
        let path = self.data_dir().join(IDENTITY_FILE);
        let backend = FileBackend::open(&path)
            .with_context(|| format!("Failed to open identity store: {}", path.display()))?;
        IdentityStore::load(Store::new(backend)).context("Failed to load users")
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.session.data_dir)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(dir: &Path, config: CliConfig) -> Context {
        Context {
            language: config.session.language,
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".dada.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(".dada.toml"));
    }

    #[test]
    fn test_catalog_applies_store_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.store.contact_whatsapp = Some("+213661000000".into());
        let ctx = context(dir.path(), config);

        let catalog = ctx.catalog();
        assert!(!catalog.products().is_empty());
        assert_eq!(catalog.settings().contact_whatsapp, "+213661000000");
    }

    #[test]
    fn test_unseeded_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.catalog.seed = false;
        assert!(context(dir.path(), config).catalog().products().is_empty());
    }

    #[test]
    fn test_wilayas_from_csv() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("wilayas.csv"),
            "code,name,commune\n31,وهران,وهران\n31,وهران,بئر الجير\n",
        )
        .unwrap();
        let mut config = CliConfig::default();
        config.catalog.wilayas = Some("wilayas.csv".into());

        let wilayas = context(dir.path(), config).wilayas().unwrap();
        assert_eq!(wilayas.len(), 1);
        assert_eq!(wilayas.communes("31").len(), 2);
    }

    #[test]
    fn test_identity_store_lives_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), CliConfig::default());
        let mut identity = ctx.identity().unwrap();
        identity.login("admin", "admin123").unwrap();

        assert!(dir.path().join(".dada").join(IDENTITY_FILE).exists());
        assert!(ctx.identity().unwrap().is_admin());
    }
}
