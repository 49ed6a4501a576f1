//! Marketplace configuration (`eco.toml`).

use std::path::{Path, PathBuf};

use eco_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

use crate::catalog::{fixture, Catalog, DecorationMode};
use crate::error::CommerceError;
use crate::listing::{CancelPolicy, InMemoryListingStore, ListingForm, ListingStore, StaticListingStore};

/// Marketplace configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Seller listing configuration.
    #[serde(default)]
    pub listings: ListingsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MarketplaceConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CommerceError::IoError(format!("{}: {}", path.display(), e)))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| CommerceError::ConfigError(format!("{}: {}", path.display(), e)))
        } else {
            toml::from_str(&content)
                .map_err(|e| CommerceError::ConfigError(format!("{}: {}", path.display(), e)))
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse `content`, falling back to the defaults. The parse error is
    /// returned alongside so the caller can report it.
    pub fn from_toml_str_or_default(content: &str) -> (Self, Option<CommerceError>) {
        match Self::from_toml_str(content) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<(), CommerceError> {
        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_toml_string()?
        };

        std::fs::write(path, content)
            .map_err(|e| CommerceError::IoError(format!("{}: {}", path.display(), e)))
    }

    /// Load and decorate the configured fixture.
    pub fn load_catalog(&self) -> Result<Catalog, CommerceError> {
        let records = match &self.catalog.fixture {
            Some(path) => fixture::load_fixture_file(path)?,
            None => fixture::default_records()?,
        };
        Ok(Catalog::new(records, self.catalog.decoration, self.catalog.seed))
    }

    /// Listing store of the configured kind, seeded with the demo listings.
    pub fn build_store(&self) -> Box<dyn ListingStore> {
        match self.listings.store {
            StoreKind::Static => Box::new(StaticListingStore::demo()),
            StoreKind::InMemory => Box::new(InMemoryListingStore::demo()),
        }
    }

    /// Empty, hidden listing form with the configured cancel policy.
    pub fn listing_form(&self) -> ListingForm {
        ListingForm::new(self.listings.cancel_policy)
    }

    /// Check that everything the config points at can be loaded.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let catalog = self.load_catalog()?;
        if catalog.is_empty() {
            return Err(CommerceError::ConfigError("catalog fixture has no products".to_string()));
        }
        Ok(())
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Fixture file; the embedded fixture when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<PathBuf>,

    /// Decoration seed.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// When decorations are drawn.
    #[serde(default)]
    pub decoration: DecorationMode,
}

fn default_seed() -> u64 {
    42
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fixture: None,
            seed: default_seed(),
            decoration: DecorationMode::default(),
        }
    }
}

/// Listing store backing the seller page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Demo listings; intents are logged only.
    #[default]
    Static,
    /// Demo listings; intents are applied for the lifetime of the process.
    InMemory,
}

/// Seller listing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingsConfig {
    #[serde(default)]
    pub store: StoreKind,

    #[serde(default)]
    pub cancel_policy: CancelPolicy,
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = MarketplaceConfig::from_toml_str("").unwrap();
        assert_eq!(config, MarketplaceConfig::default());
        assert_eq!(config.catalog.seed, 42);
        assert_eq!(config.listings.store, StoreKind::Static);
        assert_eq!(config.listings.cancel_policy, CancelPolicy::PreserveDraft);
    }

    #[test]
    fn test_parse_sections() {
        let config = MarketplaceConfig::from_toml_str(
            r#"
            [catalog]
            seed = 7
            decoration = "per_render"

            [listings]
            store = "in_memory"
            cancel_policy = "reset_draft"

            [logging]
            level = "debug"
            format = "human"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.seed, 7);
        assert_eq!(config.catalog.decoration, DecorationMode::PerRender);
        assert_eq!(config.listings.store, StoreKind::InMemory);
        assert_eq!(config.listings.cancel_policy, CancelPolicy::ResetDraft);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let err = MarketplaceConfig::from_toml_str("[listings]\nstore = \"redis\"\n").unwrap_err();
        assert!(matches!(err, CommerceError::ConfigError(_)));
    }

    #[test]
    fn test_fallback_keeps_parse_error() {
        let (config, err) = MarketplaceConfig::from_toml_str_or_default("[catalog]\nseed = \"x\"\n");
        assert_eq!(config, MarketplaceConfig::default());
        assert!(matches!(err, Some(CommerceError::ConfigError(_))));

        let (config, err) = MarketplaceConfig::from_toml_str_or_default("[catalog]\nseed = 7\n");
        assert_eq!(config.catalog.seed, 7);
        assert!(err.is_none());
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eco.toml");

        let mut config = MarketplaceConfig::default();
        config.catalog.seed = 99;
        config.listings.store = StoreKind::InMemory;
        config.save(&path).unwrap();

        let loaded = MarketplaceConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eco.json");

        let config = MarketplaceConfig::default();
        config.save(&path).unwrap();
        assert_eq!(MarketplaceConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_build_store_kinds() {
        let mut config = MarketplaceConfig::default();
        assert_eq!(config.build_store().listings().len(), 4);

        config.listings.store = StoreKind::InMemory;
        assert_eq!(config.build_store().stats().total_views, 436);
    }

    #[test]
    fn test_validate_missing_fixture() {
        let mut config = MarketplaceConfig::default();
        assert!(config.validate().is_ok());

        config.catalog.fixture = Some(PathBuf::from("/nonexistent/fixture.json"));
        assert!(matches!(config.validate(), Err(CommerceError::IoError(_))));
    }
}
