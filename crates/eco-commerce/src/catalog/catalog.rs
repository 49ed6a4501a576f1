//! The decorated product catalog.

use std::collections::BTreeMap;

use crate::catalog::{
    fixture, CatalogCategory, DecoratedProduct, DecorationMode, Decorator, ProductRecord,
    RandomDecorator, SeededDecorator,
};
use crate::error::CommerceError;
use crate::search::{self, BrowseQuery};

/// Fixture records with their decorations.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    decorated: Vec<DecoratedProduct>,
    mode: DecorationMode,
}

impl Catalog {
    /// Decorate `records` with a [`SeededDecorator`].
    pub fn new(records: Vec<ProductRecord>, mode: DecorationMode, seed: u64) -> Self {
        let mut decorator = SeededDecorator::new(seed);
        let mut catalog = Self::with_decorator(records, &mut decorator);
        catalog.mode = mode;
        catalog
    }

    /// Decorate `records` once with the given decorator. The catalog is
    /// always stable.
    pub fn with_decorator(records: Vec<ProductRecord>, decorator: &mut impl Decorator) -> Self {
        let decorated = decorate_all(&records, decorator);
        Self {
            records,
            decorated,
            mode: DecorationMode::Stable,
        }
    }

    /// Catalog over the embedded fixture.
    pub fn from_default_fixture(mode: DecorationMode, seed: u64) -> Result<Self, CommerceError> {
        let records = fixture::default_records()?;
        tracing::debug!(records = records.len(), ?mode, seed, "loaded default fixture");
        Ok(Self::new(records, mode, seed))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decorated products in fixture order. In [`DecorationMode::PerRender`]
    /// every call draws new decorations.
    pub fn decorated(&self) -> Vec<DecoratedProduct> {
        match self.mode {
            DecorationMode::Stable => self.decorated.clone(),
            DecorationMode::PerRender => decorate_all(&self.records, &mut RandomDecorator),
        }
    }

    /// Filtered and sorted view for a query.
    pub fn browse(&self, query: &BrowseQuery) -> Vec<DecoratedProduct> {
        search::derive(&self.decorated(), query)
    }

    /// Everything one catalog page shows. The grid and the per-category
    /// counts share a single set of decorations.
    pub fn view(&self, query: &BrowseQuery) -> CatalogView {
        let decorated = self.decorated();
        CatalogView {
            counts: search::category_counts(&decorated),
            products: search::derive(&decorated, query),
        }
    }
}

/// A derived page of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Filtered and sorted products.
    pub products: Vec<DecoratedProduct>,
    /// Number of products per category over the whole catalog.
    pub counts: BTreeMap<CatalogCategory, usize>,
}

fn decorate_all(records: &[ProductRecord], decorator: &mut impl Decorator) -> Vec<DecoratedProduct> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| DecoratedProduct::new(record.clone(), decorator.decorate(index, record)))
        .collect()
}
