//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use eco_commerce::catalog::StaticCatalog;
use eco_commerce::search::FilterCriteria;

use crate::config::{EcoConfig, CONFIG_NAMES};
use crate::output::Output;
use crate::session::Session;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: EcoConfig,
    /// Where the config came from, if a file was found.
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
        Self::load_from(cwd, config_path, output)
    }

    /// Load context as if run from `cwd`.
    fn load_from(cwd: PathBuf, config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (EcoConfig::load(&path)?, Some(path))
            }
            // Try to find config in current directory or parent directories
            None => match find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (EcoConfig::default(), None),
            },
        };

        let output = output.with_currency(config.store.currency);
        match &config_path {
            Some(path) => output.debug(&format!("Using config: {}", path.display())),
            None => output.debug("No config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the config file's directory, or the
    /// working directory when no config file was found.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd);
        resolve(base, path)
    }

    /// The configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<StaticCatalog> {
        match &self.config.store.catalog {
            Some(path) => {
                let path = self.resolve_path(path);
                StaticCatalog::load(&path)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Ok(StaticCatalog::sample()),
        }
    }

    /// Default filter criteria for this store.
    pub fn default_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        criteria.reset(self.config.price_ceiling());
        criteria
    }

    /// A fresh shopping session over the configured catalog.
    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(
            self.catalog()?,
            self.default_criteria(),
            self.config.checkout_config(),
        ))
    }
}

/// Find config file in directory tree.
///
/// The first existing file wins; a file that fails to load is an error, not
/// a reason to keep searching.
fn find_config(start: &Path) -> Result<Option<(EcoConfig, PathBuf)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                let config = EcoConfig::load(&config_path)?;
                return Ok(Some((config, config_path)));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
