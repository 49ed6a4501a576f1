//! Listing stores: where listing intents go.

use serde::Serialize;

use crate::error::CommerceError;
use crate::ids::ListingId;
use crate::listing::{demo_listings, DraftListing, ListingRecord, SellerStats};

/// A change the seller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingIntent {
    Create(DraftListing),
    Update { id: ListingId, draft: DraftListing },
    Remove { id: ListingId },
}

impl ListingIntent {
    pub fn kind(&self) -> &'static str {
        match self {
            ListingIntent::Create(_) => "create",
            ListingIntent::Update { .. } => "update",
            ListingIntent::Remove { .. } => "remove",
        }
    }

    /// Listing the intent targets, if it targets an existing one.
    pub fn target(&self) -> Option<ListingId> {
        match self {
            ListingIntent::Create(_) => None,
            ListingIntent::Update { id, .. } | ListingIntent::Remove { id } => Some(*id),
        }
    }
}

/// What a store did with an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    Created(ListingId),
    Updated(ListingId),
    Removed(ListingId),
    /// Accepted but not applied.
    Deferred,
}

impl IntentOutcome {
    pub fn message(&self) -> String {
        match self {
            IntentOutcome::Created(id) => format!("Listing {} created", id),
            IntentOutcome::Updated(id) => format!("Listing {} updated", id),
            IntentOutcome::Removed(id) => format!("Listing {} removed", id),
            IntentOutcome::Deferred => "Request received".to_string(),
        }
    }
}

/// Seller's listings and the sink for listing intents.
pub trait ListingStore: Send {
    fn listings(&self) -> &[ListingRecord];

    fn apply(&mut self, intent: ListingIntent) -> Result<IntentOutcome, CommerceError>;

    fn get(&self, id: ListingId) -> Option<&ListingRecord> {
        self.listings().iter().find(|l| l.id == id)
    }

    fn stats(&self) -> SellerStats {
        SellerStats::from_listings(self.listings())
    }
}

/// Fixed listing set. Intents are logged and deferred, never applied.
#[derive(Debug, Clone)]
pub struct StaticListingStore {
    listings: Vec<ListingRecord>,
}

impl StaticListingStore {
    pub fn new(listings: Vec<ListingRecord>) -> Self {
        Self { listings }
    }

    pub fn demo() -> Self {
        Self::new(demo_listings())
    }
}

impl ListingStore for StaticListingStore {
    fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }

    fn apply(&mut self, intent: ListingIntent) -> Result<IntentOutcome, CommerceError> {
        if let Some(id) = intent.target() {
            if self.get(id).is_none() {
                return Err(CommerceError::ListingNotFound(id));
            }
        }
        tracing::info!(kind = intent.kind(), target = ?intent.target(), "listing intent deferred");
        Ok(IntentOutcome::Deferred)
    }
}

/// Listing set that applies intents in memory.
#[derive(Debug, Clone)]
pub struct InMemoryListingStore {
    listings: Vec<ListingRecord>,
    next_id: ListingId,
}

impl InMemoryListingStore {
    pub fn new(listings: Vec<ListingRecord>) -> Self {
        let next_id = listings
            .iter()
            .map(|l| l.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(ListingId::new(1));
        Self { listings, next_id }
    }

    pub fn demo() -> Self {
        Self::new(demo_listings())
    }

    fn position(&self, id: ListingId) -> Result<usize, CommerceError> {
        self.listings
            .iter()
            .position(|l| l.id == id)
            .ok_or(CommerceError::ListingNotFound(id))
    }
}

impl ListingStore for InMemoryListingStore {
    fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }

    fn apply(&mut self, intent: ListingIntent) -> Result<IntentOutcome, CommerceError> {
        let outcome = match intent {
            ListingIntent::Create(draft) => {
                let id = self.next_id;
                let record = ListingRecord::from_draft(id, &draft)?;
                self.listings.push(record);
                self.next_id = id.next();
                IntentOutcome::Created(id)
            }
            ListingIntent::Update { id, draft } => {
                let pos = self.position(id)?;
                self.listings[pos].apply_draft(&draft)?;
                IntentOutcome::Updated(id)
            }
            ListingIntent::Remove { id } => {
                let pos = self.position(id)?;
                self.listings.remove(pos);
                IntentOutcome::Removed(id)
            }
        };
        tracing::info!(outcome = ?outcome, listings = self.listings.len(), "listing intent applied");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{DraftField, ListingStatus};

    fn draft() -> DraftListing {
        let mut draft = DraftListing::empty();
        draft.set_field(DraftField::Title, "Refurbished E-Reader");
        draft.set_field(DraftField::Price, "60");
        draft.set_field(DraftField::Category, "electronics");
        draft.set_field(DraftField::Condition, "good");
        draft.set_field(DraftField::Description, "Works perfectly.");
        draft
    }

    #[test]
    fn test_static_store_defers() {
        let mut store = StaticListingStore::demo();
        let outcome = store.apply(ListingIntent::Create(draft())).unwrap();
        assert_eq!(outcome, IntentOutcome::Deferred);
        assert_eq!(store.listings().len(), 4);

        let outcome = store.apply(ListingIntent::Remove { id: ListingId::new(2) }).unwrap();
        assert_eq!(outcome, IntentOutcome::Deferred);
        assert_eq!(store.listings().len(), 4);
    }

    #[test]
    fn test_static_store_unknown_id() {
        let mut store = StaticListingStore::demo();
        let err = store.apply(ListingIntent::Remove { id: ListingId::new(77) }).unwrap_err();
        assert!(matches!(err, CommerceError::ListingNotFound(id) if id == ListingId::new(77)));
    }

    #[test]
    fn test_in_memory_create_assigns_next_id() {
        let mut store = InMemoryListingStore::demo();
        let outcome = store.apply(ListingIntent::Create(draft())).unwrap();
        assert_eq!(outcome, IntentOutcome::Created(ListingId::new(5)));

        let created = store.get(ListingId::new(5)).unwrap();
        assert_eq!(created.price, "$60");
        assert_eq!(created.status, ListingStatus::Active);
        assert_eq!(created.views, 0);
    }

    #[test]
    fn test_in_memory_update_and_remove() {
        let mut store = InMemoryListingStore::demo();
        store
            .apply(ListingIntent::Update { id: ListingId::new(1), draft: draft() })
            .unwrap();
        assert_eq!(store.get(ListingId::new(1)).unwrap().title, "Refurbished E-Reader");

        let outcome = store.apply(ListingIntent::Remove { id: ListingId::new(1) }).unwrap();
        assert_eq!(outcome, IntentOutcome::Removed(ListingId::new(1)));
        assert!(store.get(ListingId::new(1)).is_none());
        assert_eq!(store.stats().products_listed, 3);
    }

    #[test]
    fn test_in_memory_empty_store_starts_at_one() {
        let mut store = InMemoryListingStore::new(Vec::new());
        let outcome = store.apply(ListingIntent::Create(draft())).unwrap();
        assert_eq!(outcome, IntentOutcome::Created(ListingId::new(1)));
    }

    #[test]
    fn test_in_memory_invalid_draft_not_stored() {
        let mut store = InMemoryListingStore::demo();
        let mut bad = draft();
        bad.set_field(DraftField::Category, "toys");
        assert!(store.apply(ListingIntent::Create(bad)).is_err());
        assert_eq!(store.listings().len(), 4);
    }

    #[test]
    fn test_intent_serializes_with_kind() {
        let value = serde_json::to_value(ListingIntent::Remove { id: ListingId::new(3) }).unwrap();
        assert_eq!(value["kind"], "remove");
        assert_eq!(value["id"], 3);
    }
}
