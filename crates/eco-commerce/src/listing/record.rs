//! Seller listing records and their option lists.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;
use crate::ids::ListingId;
use crate::listing::DraftListing;

/// Eco features offered as checkboxes in the listing form, in display order.
pub const LISTING_ECO_FEATURES: [&str; 12] = [
    "Biodegradable",
    "Recyclable",
    "Solar powered",
    "Energy efficient",
    "Sustainable materials",
    "Fair trade",
    "Organic",
    "Plastic-free",
    "Carbon neutral",
    "Renewable energy",
    "Upcycled",
    "Compostable",
];

/// Category a seller lists a product under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Electronics,
    Home,
    Fashion,
    Furniture,
    Beauty,
    Sports,
}

impl ListingCategory {
    pub const ALL: [ListingCategory; 6] = [
        ListingCategory::Electronics,
        ListingCategory::Home,
        ListingCategory::Fashion,
        ListingCategory::Furniture,
        ListingCategory::Beauty,
        ListingCategory::Sports,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ListingCategory::Electronics => "electronics",
            ListingCategory::Home => "home",
            ListingCategory::Fashion => "fashion",
            ListingCategory::Furniture => "furniture",
            ListingCategory::Beauty => "beauty",
            ListingCategory::Sports => "sports",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingCategory::Electronics => "Electronics",
            ListingCategory::Home => "Home & Kitchen",
            ListingCategory::Fashion => "Fashion & Accessories",
            ListingCategory::Furniture => "Furniture",
            ListingCategory::Beauty => "Beauty & Personal Care",
            ListingCategory::Sports => "Sports & Outdoors",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, CommerceError> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == slug.trim())
            .ok_or_else(|| CommerceError::UnknownCategory(slug.to_string()))
    }
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Condition of a listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    pub const ALL: [Condition; 4] = [Condition::New, Condition::LikeNew, Condition::Good, Condition::Fair];

    pub fn slug(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, CommerceError> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == slug.trim())
            .ok_or_else(|| CommerceError::UnknownCondition(slug.to_string()))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a listing is still for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ListingStatus {
    #[default]
    Active,
    Sold,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Sold => "Sold",
        }
    }
}

/// A product the seller has listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: ListingId,
    pub title: String,
    /// Display price, e.g. "$25.99".
    pub price: String,
    pub category: ListingCategory,
    pub condition: Condition,
    pub description: String,
    pub eco_features: Vec<String>,
    pub image: String,
    pub status: ListingStatus,
    pub views: u64,
    pub likes: u64,
}

impl ListingRecord {
    /// New active listing from a submitted draft.
    pub fn from_draft(id: ListingId, draft: &DraftListing) -> Result<Self, CommerceError> {
        let mut record = Self {
            id,
            title: String::new(),
            price: String::new(),
            category: ListingCategory::from_slug(&draft.category)?,
            condition: Condition::from_slug(&draft.condition)?,
            description: String::new(),
            eco_features: Vec::new(),
            image: String::new(),
            status: ListingStatus::Active,
            views: 0,
            likes: 0,
        };
        record.apply_draft(draft)?;
        Ok(record)
    }

    /// Replace the seller-editable fields with the draft's. Status and
    /// counters are kept; the image only changes when the draft has one.
    pub fn apply_draft(&mut self, draft: &DraftListing) -> Result<(), CommerceError> {
        let category = ListingCategory::from_slug(&draft.category)?;
        let condition = Condition::from_slug(&draft.condition)?;

        self.title = draft.title.trim().to_string();
        self.price = display_price(&draft.price);
        self.category = category;
        self.condition = condition;
        self.description = draft.description.trim().to_string();
        self.eco_features = draft.eco_features.clone();
        if let Some(image) = draft.images.first() {
            self.image = image.clone();
        }
        Ok(())
    }

    /// Eco features shown on the gallery card.
    pub fn card_features(&self) -> &[String] {
        &self.eco_features[..self.eco_features.len().min(2)]
    }

    pub fn is_sold(&self) -> bool {
        self.status == ListingStatus::Sold
    }
}

/// Format a price typed into the form ("25.99") for display ("$25.99").
pub fn display_price(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with('$') {
        raw.to_string()
    } else {
        format!("${}", raw)
    }
}

fn features(list: &[&str]) -> Vec<String> {
    list.iter().map(|f| f.to_string()).collect()
}

/// The seller's demonstration listings.
pub fn demo_listings() -> Vec<ListingRecord> {
    vec![
        ListingRecord {
            id: ListingId::new(1),
            title: "Bamboo Water Bottle - Eco-Friendly & Reusable".to_string(),
            price: "$25.99".to_string(),
            category: ListingCategory::Home,
            condition: Condition::New,
            description: "100% bamboo construction, leak-proof design, perfect for reducing plastic waste."
                .to_string(),
            eco_features: features(&["Biodegradable", "Plastic-free", "Sustainable materials"]),
            image: "https://thumbs.dreamstime.com/b/sustainable-living-reusable-bag-water-bottle-utensils-eco-friendly-pouch-perfect-zero-waste-lifestyle-flat-lay-image-370023755.jpg".to_string(),
            status: ListingStatus::Active,
            views: 124,
            likes: 18,
        },
        ListingRecord {
            id: ListingId::new(2),
            title: "Solar-Powered LED Garden Lights (Set of 6)".to_string(),
            price: "$45.00".to_string(),
            category: ListingCategory::Electronics,
            condition: Condition::LikeNew,
            description: "Solar-powered outdoor lighting system, weather-resistant, automatic on/off."
                .to_string(),
            eco_features: features(&["Solar powered", "Energy efficient", "Weather resistant"]),
            image: "https://www.solarsphere.in/wp-content/uploads/2024/06/8164UkHY1yL._SL1500_.jpg"
                .to_string(),
            status: ListingStatus::Active,
            views: 89,
            likes: 12,
        },
        ListingRecord {
            id: ListingId::new(3),
            title: "Organic Cotton Tote Bags (Pack of 3)".to_string(),
            price: "$18.50".to_string(),
            category: ListingCategory::Fashion,
            condition: Condition::New,
            description: "GOTS certified organic cotton, durable construction, perfect for grocery shopping."
                .to_string(),
            eco_features: features(&["Organic cotton", "Reusable", "Fair trade"]),
            image: "https://i.etsystatic.com/25519571/r/il/157b76/3752030588/il_570xN.3752030588_d4f0.jpg"
                .to_string(),
            status: ListingStatus::Sold,
            views: 156,
            likes: 23,
        },
        ListingRecord {
            id: ListingId::new(4),
            title: "Recycled Plastic Outdoor Furniture Set".to_string(),
            price: "$299.99".to_string(),
            category: ListingCategory::Furniture,
            condition: Condition::Good,
            description: "Made from 100% recycled ocean plastic, weather-resistant, UV-protected.".to_string(),
            eco_features: features(&["Recycled materials", "Ocean plastic", "Weather resistant"]),
            image: "https://images.unsplash.com/photo-1556228453-efd6c1ff04f6?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&h=300&q=80".to_string(),
            status: ListingStatus::Active,
            views: 67,
            likes: 9,
        },
    ]
}
