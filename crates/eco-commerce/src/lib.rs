//! Domain types and logic for the sustainable products marketplace.
//!
//! - **Catalog**: product fixture, sustainability decoration, categories
//! - **Search**: browse query, category filter and sort pipeline, facet counts
//! - **Listing**: seller listings, draft form state machine, listing stores
//!
//! # Example
//!
//! ```rust
//! use eco_commerce::prelude::*;
//!
//! let catalog = Catalog::from_default_fixture(DecorationMode::Stable, 7).unwrap();
//! let query = BrowseQuery::from_params(Some("home"), Some("sustainability"));
//! for product in catalog.browse(&query) {
//!     assert_eq!(product.category(), CatalogCategory::Home);
//! }
//! ```

pub mod config;
pub mod error;
pub mod ids;

pub mod catalog;
pub mod listing;
pub mod search;

pub use config::MarketplaceConfig;
pub use error::CommerceError;
pub use ids::ListingId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CatalogConfig, ListingsConfig, LoggingConfig, MarketplaceConfig, StoreKind};
    pub use crate::error::CommerceError;
    pub use crate::ids::ListingId;

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogCategory, CatalogView, CategoryFilter, DecoratedProduct, Decoration, DecorationMode,
        Decorator, EcoTier, ProductRecord, RandomDecorator, ScriptedDecorator, SeededDecorator,
        StarRating, SustainabilityScore, CATALOG_ECO_FEATURES,
    };

    // Search
    pub use crate::search::{category_counts, derive, BrowseQuery, SortKey};

    // Listing
    pub use crate::listing::{
        CancelPolicy, Condition, DraftField, DraftListing, FormVisibility, InMemoryListingStore,
        IntentOutcome, ListingCategory, ListingForm, ListingIntent, ListingRecord, ListingStatus,
        ListingStore, SellerStats, StaticListingStore, LISTING_ECO_FEATURES,
    };
}
