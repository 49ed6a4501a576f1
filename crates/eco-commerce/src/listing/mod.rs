//! Seller listing module.
//!
//! Contains listing records, the draft form and listing stores.

mod draft;
mod form;
mod record;
mod stats;
mod store;

pub use draft::{DraftField, DraftListing};
pub use form::{CancelPolicy, FormVisibility, ListingForm};
pub use record::{
    demo_listings, display_price, Condition, ListingCategory, ListingRecord, ListingStatus,
    LISTING_ECO_FEATURES,
};
pub use stats::SellerStats;
pub use store::{InMemoryListingStore, IntentOutcome, ListingIntent, ListingStore, StaticListingStore};
