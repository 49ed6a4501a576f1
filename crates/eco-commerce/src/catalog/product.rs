//! Product records from the catalog fixture.

use serde::{Deserialize, Serialize};

/// Rating value the fixture uses for unrated products.
pub const NO_RATING: &str = "N/A";

/// Title shown when a record has none.
pub const PLACEHOLDER_TITLE: &str = "Eco-Friendly Product";

/// Image shown when a record has none.
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/400/320";

/// A product as it appears in the catalog fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(default)]
    pub title: String,
    /// Display price, e.g. "$24.99".
    pub price: String,
    /// Numeric string or "N/A".
    #[serde(default = "default_rating")]
    pub rating: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub product_url: String,
}

fn default_rating() -> String {
    NO_RATING.to_string()
}

impl ProductRecord {
    pub fn new(title: impl Into<String>, price: impl Into<String>, rating: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            rating: rating.into(),
            image_url: String::new(),
            product_url: String::new(),
        }
    }

    /// Numeric rating, or `None` for "N/A" and other non-numeric values.
    pub fn rating_value(&self) -> Option<f64> {
        parse_leading_float(&self.rating)
    }

    /// Key used when sorting by rating. Unrated products sort as 0, and so
    /// does -0.
    pub fn rating_sort_key(&self) -> f64 {
        self.rating_value().unwrap_or(0.0) + 0.0
    }

    /// Star breakdown for display, `None` when the product is unrated.
    pub fn stars(&self) -> Option<StarRating> {
        if self.rating == NO_RATING {
            return None;
        }
        self.rating_value().map(StarRating::from_value)
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            PLACEHOLDER_TITLE
        } else {
            &self.title
        }
    }

    pub fn display_image(&self) -> &str {
        if self.image_url.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image_url
        }
    }
}

/// Full and half stars for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
}

impl StarRating {
    /// Whole part gives full stars; a fractional part of at least .5 adds a
    /// half star. Capped at five stars.
    pub fn from_value(value: f64) -> Self {
        let value = value.clamp(0.0, 5.0);
        let full = value.floor() as u8;
        let half = full < 5 && value.fract() >= 0.5;
        Self { full, half }
    }
}

/// Parse the longest numeric prefix of `s` the way browsers' `parseFloat`
/// does: leading whitespace is skipped, trailing text is ignored, and a
/// string without a numeric prefix yields `None`. NaN also yields `None`.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let value: f64 = s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok()?;
        return Some(value);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}
