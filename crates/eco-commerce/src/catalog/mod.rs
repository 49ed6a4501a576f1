//! Product catalog module.
//!
//! Contains the fixture records, sustainability decoration and categories.

mod catalog;
mod category;
mod decoration;
pub mod fixture;
mod product;

pub use catalog::{Catalog, CatalogView};
pub use category::{CatalogCategory, CategoryFilter};
pub use decoration::{
    DecoratedProduct, Decoration, DecorationMode, Decorator, EcoTier, RandomDecorator,
    ScriptedDecorator, SeededDecorator, SustainabilityScore, CATALOG_ECO_FEATURES,
    MAX_DRAWN_FEATURES,
};
pub use product::{parse_leading_float, ProductRecord, StarRating, NO_RATING, PLACEHOLDER_IMAGE, PLACEHOLDER_TITLE};
