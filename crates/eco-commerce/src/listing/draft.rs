//! Draft state of the listing form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;
use crate::listing::{Condition, ListingCategory, ListingRecord};

/// Required text fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Price,
    Category,
    Condition,
    Description,
}

impl DraftField {
    /// Fields in form order.
    pub const ALL: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Price,
        DraftField::Category,
        DraftField::Condition,
        DraftField::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Price => "price",
            DraftField::Category => "category",
            DraftField::Condition => "condition",
            DraftField::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Product Title",
            DraftField::Price => "Price",
            DraftField::Category => "Category",
            DraftField::Condition => "Condition",
            DraftField::Description => "Description",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values typed into the listing form.
///
/// Category and condition hold the raw select values (slugs) so a draft can
/// be partially filled. They are parsed on validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftListing {
    pub title: String,
    pub price: String,
    pub category: String,
    pub condition: String,
    pub description: String,
    /// Ordered set; insertion order is display order.
    pub eco_features: Vec<String>,
    pub images: Vec<String>,
}

impl DraftListing {
    /// All strings empty, both lists empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Price => &self.price,
            DraftField::Category => &self.category,
            DraftField::Condition => &self.condition,
            DraftField::Description => &self.description,
        }
    }

    /// Replace one field's value.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Price => self.price = value,
            DraftField::Category => self.category = value,
            DraftField::Condition => self.condition = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Replace a field addressed by its form name.
    pub fn set_named_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), CommerceError> {
        let field = DraftField::parse(name).ok_or_else(|| CommerceError::UnknownField(name.to_string()))?;
        self.set_field(field, value);
        Ok(())
    }

    /// Remove `feature` if selected, otherwise append it. Returns whether the
    /// feature is selected afterwards.
    pub fn toggle_eco_feature(&mut self, feature: &str) -> bool {
        if let Some(pos) = self.eco_features.iter().position(|f| f == feature) {
            self.eco_features.remove(pos);
            false
        } else {
            self.eco_features.push(feature.to_string());
            true
        }
    }

    pub fn has_eco_feature(&self, feature: &str) -> bool {
        self.eco_features.iter().any(|f| f == feature)
    }

    /// Attach image references. Blank names are skipped.
    pub fn add_images<I, S>(&mut self, images: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images.extend(
            images
                .into_iter()
                .map(Into::into)
                .filter(|image: &String| !image.trim().is_empty()),
        );
    }

    /// Required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    /// Check the draft can become a listing.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::MissingFields(missing));
        }
        ListingCategory::from_slug(&self.category)?;
        Condition::from_slug(&self.condition)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    /// Draft pre-filled from an existing listing, for editing.
    pub fn from_record(record: &ListingRecord) -> Self {
        Self {
            title: record.title.clone(),
            price: record.price.trim_start_matches('$').to_string(),
            category: record.category.slug().to_string(),
            condition: record.condition.slug().to_string(),
            description: record.description.clone(),
            eco_features: record.eco_features.clone(),
            images: Vec::new(),
        }
    }
}
