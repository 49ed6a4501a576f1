//! Listing form state machine.
//!
//! The form is either hidden or visible and owns one draft. Opening, toggling,
//! cancelling and submitting move it between those states:
//!
//! ```text
//! Hidden --toggle/open/edit--> Visible --cancel--> Hidden
//!                              Visible --submit ok--> Hidden (draft reset)
//!                              Visible --submit err--> Visible (unchanged)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ListingId;
use crate::listing::{DraftListing, IntentOutcome, ListingIntent, ListingRecord, ListingStore};

/// Whether the form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVisibility {
    #[default]
    Hidden,
    Visible,
}

impl FormVisibility {
    pub fn is_visible(&self) -> bool {
        *self == FormVisibility::Visible
    }

    pub fn toggled(&self) -> Self {
        match self {
            FormVisibility::Hidden => FormVisibility::Visible,
            FormVisibility::Visible => FormVisibility::Hidden,
        }
    }
}

/// What Cancel does to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelPolicy {
    /// Keep the draft so reopening shows the previous input.
    #[default]
    PreserveDraft,
    /// Clear the draft.
    ResetDraft,
}

/// The create/edit listing form.
#[derive(Debug, Clone, Default)]
pub struct ListingForm {
    visibility: FormVisibility,
    draft: DraftListing,
    cancel_policy: CancelPolicy,
    editing: Option<ListingId>,
}

impl ListingForm {
    pub fn new(cancel_policy: CancelPolicy) -> Self {
        Self {
            cancel_policy,
            ..Self::default()
        }
    }

    /// Restore a form from request state.
    pub fn with_state(mut self, visibility: FormVisibility, draft: DraftListing) -> Self {
        self.visibility = visibility;
        self.draft = draft;
        self
    }

    pub fn with_editing(mut self, id: Option<ListingId>) -> Self {
        self.editing = id;
        self
    }

    pub fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn draft(&self) -> &DraftListing {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftListing {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<ListingId> {
        self.editing
    }

    pub fn cancel_policy(&self) -> CancelPolicy {
        self.cancel_policy
    }

    /// "List New Product": flip visibility.
    pub fn toggle(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    pub fn open(&mut self) {
        self.visibility = FormVisibility::Visible;
    }

    /// Open the form pre-filled with an existing listing.
    pub fn edit(&mut self, record: &ListingRecord) {
        self.draft = DraftListing::from_record(record);
        self.editing = Some(record.id);
        self.open();
    }

    pub fn cancel(&mut self) {
        self.visibility = FormVisibility::Hidden;
        if self.cancel_policy == CancelPolicy::ResetDraft {
            self.draft.reset();
            self.editing = None;
        }
    }

    /// Validate the draft and hand it to the store. On success the draft is
    /// reset and the form hidden; on failure nothing changes.
    pub fn submit(&mut self, store: &mut dyn ListingStore) -> Result<IntentOutcome, CommerceError> {
        self.draft.validate()?;

        let payload = serde_json::to_string(&self.draft)?;
        tracing::info!(editing = ?self.editing, %payload, "listing submitted");

        let intent = match self.editing {
            Some(id) => ListingIntent::Update {
                id,
                draft: self.draft.clone(),
            },
            None => ListingIntent::Create(self.draft.clone()),
        };
        let outcome = store.apply(intent)?;

        self.draft.reset();
        self.editing = None;
        self.visibility = FormVisibility::Hidden;
        Ok(outcome)
    }
}
