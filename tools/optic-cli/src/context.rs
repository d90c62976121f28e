//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use optic_commerce::catalog::CatalogStore;
use optic_commerce::ledger::Ledger;
use optic_commerce::Storefront;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["optic.toml", ".optic.toml", "optic.json"];

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
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            // Search the current directory, then its parents
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<CatalogStore> {
        match self.config.catalog.path.as_deref() {
            Some(path) => {
                let path = self.resolve_path(path);
                debug!(path = %path.display(), "loading catalog file");
                CatalogStore::load(&path)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Ok(CatalogStore::seed(self.config.store.currency)),
        }
    }

    /// The invoice history in the store currency.
    pub fn ledger(&self) -> Result<Ledger> {
        Ledger::seed(self.config.store.currency).context("Failed to build invoice ledger")
    }

    /// Open a storefront session over the configured catalog.
    pub fn open_storefront(&self) -> Result<Storefront> {
        Ok(Storefront::open(self.catalog()?).with_quote_prefix(&self.config.quote.id_prefix))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
