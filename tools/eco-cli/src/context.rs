//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use eco_commerce::MarketplaceConfig;

use crate::config::CONFIG_FILE_NAMES;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Marketplace configuration.
    pub config: MarketplaceConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one above
    /// the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve_against(&cwd, path);
                let config = MarketplaceConfig::load(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?;
                (config, Some(path))
            }
            None => match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (MarketplaceConfig::default(), None),
            },
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_against(&self.cwd, path)
    }
}

fn resolve_against(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

/// Find a config file in the directory tree above `start`.
pub fn find_config(start: &Path) -> Option<(MarketplaceConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if !config_path.exists() {
                continue;
            }
            match MarketplaceConfig::load(&config_path) {
                Ok(config) => return Some((config, config_path)),
                Err(e) => tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config"),
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_commerce::config::StoreKind;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".eco.toml"),
            "[listings]\nstore = \"in_memory\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(config.listings.store, StoreKind::InMemory);
        assert_eq!(path, dir.path().join(".eco.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("eco.toml"), "[catalog]\nseed = 1\n").unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("eco.toml"), "[catalog]\nseed = 2\n").unwrap();

        let (config, _) = find_config(&nested).unwrap();
        assert_eq!(config.catalog.seed, 2);
    }

    #[test]
    fn test_resolve_against() {
        let cwd = Path::new("/srv/market");
        assert_eq!(resolve_against(cwd, "fixtures/a.json"), PathBuf::from("/srv/market/fixtures/a.json"));
        assert_eq!(resolve_against(cwd, "/tmp/a.json"), PathBuf::from("/tmp/a.json"));
    }
}
