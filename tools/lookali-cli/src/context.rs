//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use lookali_commerce::catalog::{Catalog, Seller};
use lookali_commerce::contact::ContactPreferences;
use tracing::{debug, warn};

use crate::config::{LookaliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: LookaliConfig,
    /// The catalog every command reads.
    pub catalog: Catalog,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load config and catalog.
    ///
    /// `catalog_path` overrides the config's catalog path.
    pub fn load(
        config_path: Option<&str>,
        catalog_path: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            LookaliConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        let catalog_path = catalog_path
            .map(str::to_string)
            .or_else(|| config.catalog.path.clone());
        let catalog = match catalog_path {
            Some(path) => {
                let path = resolve_path(&cwd, &path);
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&content)
                    .with_context(|| format!("Invalid catalog: {}", path.display()))?
            }
            None => Catalog::demo().context("Bundled catalog is invalid")?,
        };

        Ok(Self {
            config,
            catalog,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<LookaliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if !config_path.exists() {
                    continue;
                }
                match LookaliConfig::load(config_path.to_str()?) {
                    Ok(config) => {
                        debug!(path = %config_path.display(), "loaded config");
                        return Some(config);
                    }
                    Err(e) => {
                        warn!(
                            path = %config_path.display(),
                            error = %format!("{:#}", e),
                            "skipping unreadable config"
                        );
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Contact preferences for a seller, with the configured delivery.
    pub fn preferences_for(&self, seller: Option<&Seller>) -> ContactPreferences {
        ContactPreferences::for_seller(seller).with_delivery(self.config.default_delivery())
    }

    /// Page size from the config unless overridden.
    pub fn page_size(&self, per_page: Option<usize>) -> usize {
        per_page.unwrap_or(self.config.browse.page_size)
    }

    /// Public URL of a page, for share links.
    pub fn page_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.contact.share_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lookali.toml"), "location = \"Recife\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Context::find_config(&nested).unwrap();
        assert_eq!(config.location, "Recife");
    }

    #[test]
    fn test_find_config_skips_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lookali.toml"), "location = \"Recife\"\n").unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("lookali.toml"), "[browse\npage_size = ").unwrap();

        let config = Context::find_config(&nested).unwrap();
        assert_eq!(config.location, "Recife");
    }
}
