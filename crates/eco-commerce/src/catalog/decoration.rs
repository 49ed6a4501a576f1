//! Sustainability decoration of catalog products.
//!
//! Every product is shown with an eco score, a prefix of the canonical
//! eco-feature list and a category. None of these come from the fixture; a
//! [`Decorator`] assigns them. The catalog assigns them once per record at
//! load time ([`DecorationMode::Stable`]) unless configured to re-draw them on
//! every derivation ([`DecorationMode::PerRender`]).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::category::CatalogCategory;
use super::product::ProductRecord;

/// Canonical eco features; decorations always take a prefix of this list.
pub const CATALOG_ECO_FEATURES: [&str; 6] = [
    "Recyclable packaging",
    "Carbon neutral shipping",
    "Sustainable materials",
    "Energy efficient",
    "Biodegradable",
    "Fair trade certified",
];

/// Upper bound (inclusive) of the random feature prefix length.
pub const MAX_DRAWN_FEATURES: usize = 3;

/// Eco score between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SustainabilityScore(u8);

impl SustainabilityScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(score: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&score).then_some(Self(score))
    }

    /// Clamp an arbitrary value into range.
    pub fn saturating(score: u8) -> Self {
        Self(score.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn tier(&self) -> EcoTier {
        match self.0 {
            4..=5 => EcoTier::High,
            3 => EcoTier::Medium,
            _ => EcoTier::Low,
        }
    }
}

/// Badge tier used to color the eco score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcoTier {
    High,
    Medium,
    Low,
}

impl EcoTier {
    pub fn css_class(&self) -> &'static str {
        match self {
            EcoTier::High => "eco-high",
            EcoTier::Medium => "eco-medium",
            EcoTier::Low => "eco-low",
        }
    }
}

/// Metadata attached to one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoration {
    pub sustainability_score: SustainabilityScore,
    pub eco_features: Vec<String>,
    pub category: CatalogCategory,
}

impl Decoration {
    /// Build a decoration from drawn values. The score is clamped to 1..=5
    /// and the feature count to the canonical list length.
    pub fn new(score: u8, feature_count: usize, category: CatalogCategory) -> Self {
        let feature_count = feature_count.min(CATALOG_ECO_FEATURES.len());
        Self {
            sustainability_score: SustainabilityScore::saturating(score),
            eco_features: CATALOG_ECO_FEATURES[..feature_count]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            category,
        }
    }

    fn draw(rng: &mut impl Rng) -> Self {
        let score = rng.gen_range(SustainabilityScore::MIN..=SustainabilityScore::MAX);
        let feature_count = rng.gen_range(1..=MAX_DRAWN_FEATURES);
        let category = CatalogCategory::ALL[rng.gen_range(0..CatalogCategory::ALL.len())];
        Self::new(score, feature_count, category)
    }
}

/// Assigns decorations to catalog records.
pub trait Decorator {
    /// Decorate the record at `index` in fixture order.
    fn decorate(&mut self, index: usize, record: &ProductRecord) -> Decoration;
}

/// Deterministic decorator keyed by `(seed, index)`.
///
/// A record's decoration depends only on the seed and its fixture position,
/// never on what else was decorated before it.
#[derive(Debug, Clone, Copy)]
pub struct SeededDecorator {
    seed: u64,
}

impl SeededDecorator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Decorator for SeededDecorator {
    fn decorate(&mut self, index: usize, _record: &ProductRecord) -> Decoration {
        let mixed = self
            .seed
            .wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let mut rng = StdRng::seed_from_u64(mixed);
        Decoration::draw(&mut rng)
    }
}

/// Unseeded decorator: a fresh draw on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomDecorator;

impl Decorator for RandomDecorator {
    fn decorate(&mut self, _index: usize, _record: &ProductRecord) -> Decoration {
        Decoration::draw(&mut rand::thread_rng())
    }
}

/// Replays a fixed list of decorations, cycling by record index.
#[derive(Debug, Clone)]
pub struct ScriptedDecorator {
    script: Vec<Decoration>,
}

impl ScriptedDecorator {
    pub fn new(script: Vec<Decoration>) -> Self {
        Self { script }
    }
}

impl Decorator for ScriptedDecorator {
    fn decorate(&mut self, index: usize, _record: &ProductRecord) -> Decoration {
        if self.script.is_empty() {
            return Decoration::new(SustainabilityScore::MIN, 1, CatalogCategory::Electronics);
        }
        self.script[index % self.script.len()].clone()
    }
}

/// When decorations are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationMode {
    /// Drawn once per record at catalog load, seeded by record index.
    #[default]
    Stable,
    /// Re-drawn on every derivation. Filter and sort results vary between
    /// renders in this mode.
    PerRender,
}

/// A catalog record together with its decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoratedProduct {
    #[serde(flatten)]
    pub record: ProductRecord,
    #[serde(flatten)]
    pub decoration: Decoration,
}

impl DecoratedProduct {
    pub fn new(record: ProductRecord, decoration: Decoration) -> Self {
        Self { record, decoration }
    }

    pub fn category(&self) -> CatalogCategory {
        self.decoration.category
    }

    pub fn score(&self) -> SustainabilityScore {
        self.decoration.sustainability_score
    }

    pub fn eco_features(&self) -> &[String] {
        &self.decoration.eco_features
    }
}
