//! Commerce error types.

use thiserror::Error;

use crate::ids::ListingId;
use crate::listing::DraftField;

/// Errors that can occur in marketplace operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Listing not found.
    #[error("Listing not found: {0}")]
    ListingNotFound(ListingId),

    /// Draft is missing required fields.
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<DraftField>),

    /// Draft field name not recognized.
    #[error("Unknown draft field: {0}")]
    UnknownField(String),

    /// Listing category slug not recognized.
    #[error("Unknown listing category: {0}")]
    UnknownCategory(String),

    /// Listing condition slug not recognized.
    #[error("Unknown listing condition: {0}")]
    UnknownCondition(String),

    /// Product fixture could not be parsed.
    #[error("Invalid product fixture: {0}")]
    FixtureError(String),

    /// Configuration could not be parsed or written.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::IoError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::ConfigError(e.to_string())
    }
}

impl From<toml::ser::Error> for CommerceError {
    fn from(e: toml::ser::Error) -> Self {
        CommerceError::ConfigError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = CommerceError::MissingFields(vec![DraftField::Title, DraftField::Price]);
        assert_eq!(err.to_string(), "Missing required fields: title, price");
    }

    #[test]
    fn test_listing_not_found_message() {
        let err = CommerceError::ListingNotFound(ListingId::new(9));
        assert_eq!(err.to_string(), "Listing not found: 9");
    }
}
