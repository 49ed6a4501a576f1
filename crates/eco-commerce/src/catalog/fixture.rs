//! Loading the static product fixture.

use std::path::Path;

use crate::catalog::ProductRecord;
use crate::error::CommerceError;

/// Fixture compiled into the crate.
pub const DEFAULT_FIXTURE: &str = include_str!("../../fixtures/products.json");

/// Parse a JSON array of product records.
pub fn load_fixture_str(json: &str) -> Result<Vec<ProductRecord>, CommerceError> {
    serde_json::from_str(json).map_err(|e| CommerceError::FixtureError(e.to_string()))
}

/// Read and parse a fixture file.
pub fn load_fixture_file(path: &Path) -> Result<Vec<ProductRecord>, CommerceError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| CommerceError::IoError(format!("{}: {}", path.display(), e)))?;
    load_fixture_str(&json)
}

/// Records of the embedded fixture.
pub fn default_records() -> Result<Vec<ProductRecord>, CommerceError> {
    load_fixture_str(DEFAULT_FIXTURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_fixture_parses() {
        let records = default_records().unwrap();
        assert_eq!(records.len(), 12);
        assert!(records.iter().any(|r| r.rating == "N/A"));
        // One record has neither title nor image.
        assert!(records.iter().any(|r| r.title.is_empty() && r.image_url.is_empty()));
    }

    #[test]
    fn test_invalid_fixture_is_error() {
        let err = load_fixture_str("{\"title\": 1}").unwrap_err();
        assert!(matches!(err, CommerceError::FixtureError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title":"Cork Coasters","price":"$11.00","rating":"4.9"}}]"#).unwrap();

        let records = load_fixture_file(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Cork Coasters");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_fixture_file(Path::new("/nonexistent/products.json")).unwrap_err();
        assert!(matches!(err, CommerceError::IoError(_)));
    }
}
