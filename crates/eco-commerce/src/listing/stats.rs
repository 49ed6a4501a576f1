//! Seller dashboard statistics.

use serde::Serialize;

use crate::listing::ListingRecord;

/// Totals shown on the seller dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStats {
    pub products_listed: usize,
    pub items_sold: usize,
    pub total_views: u64,
    pub total_likes: u64,
}

impl SellerStats {
    pub fn from_listings(listings: &[ListingRecord]) -> Self {
        listings.iter().fold(Self::default(), |mut stats, listing| {
            stats.products_listed += 1;
            if listing.is_sold() {
                stats.items_sold += 1;
            }
            stats.total_views += listing.views;
            stats.total_likes += listing.likes;
            stats
        })
    }
}
