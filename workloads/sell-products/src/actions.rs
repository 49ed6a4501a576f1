//! Form posts to listing form transitions.
//!
//! The page is stateless between requests: the listing form posts its
//! visibility, the id being edited and every draft field back on each action,
//! and the handler rebuilds the [`ListingForm`] from them before applying the
//! action.

use eco_sdk::eco_commerce::listing::{
    CancelPolicy, DraftField, DraftListing, FormVisibility, ListingForm, ListingIntent,
    ListingStore,
};
use eco_sdk::eco_commerce::{CommerceError, ListingId};
use eco_sdk::eco_core::{FormData, WorkloadError};

/// Something the seller clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellAction {
    /// "List New Product"
    Toggle,
    Submit,
    Cancel,
    Edit(ListingId),
    Remove(ListingId),
}

impl SellAction {
    /// Parse the `action` field of a form post. Listing actions carry the id
    /// in the value, e.g. `edit:3`.
    pub fn from_form(form: &FormData) -> Result<Self, WorkloadError> {
        let action = form
            .get("action")
            .ok_or_else(|| WorkloadError::BadRequest("missing action".to_string()))?;

        let (name, id) = match action.split_once(':') {
            Some((name, id)) => (name, Some(id)),
            None => (action, None),
        };

        match (name, id) {
            ("toggle", None) => Ok(SellAction::Toggle),
            ("submit", None) => Ok(SellAction::Submit),
            ("cancel", None) => Ok(SellAction::Cancel),
            ("edit", id) => Ok(SellAction::Edit(listing_id(id)?)),
            ("remove", id) => Ok(SellAction::Remove(listing_id(id)?)),
            _ => Err(WorkloadError::BadRequest(format!("unknown action: {}", action))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SellAction::Toggle => "toggle",
            SellAction::Submit => "submit",
            SellAction::Cancel => "cancel",
            SellAction::Edit(_) => "edit",
            SellAction::Remove(_) => "remove",
        }
    }

    /// Value of the `action` field that posts this action.
    pub fn form_value(&self) -> String {
        match self {
            SellAction::Edit(id) | SellAction::Remove(id) => format!("{}:{}", self.as_str(), id),
            _ => self.as_str().to_string(),
        }
    }
}

fn listing_id(raw: Option<&str>) -> Result<ListingId, WorkloadError> {
    let raw = raw.ok_or_else(|| WorkloadError::BadRequest("missing listing id".to_string()))?;
    raw.parse()
        .map_err(|_| WorkloadError::BadRequest(format!("invalid listing id: {}", raw)))
}

/// Draft fields as posted by the listing form. `ecoFeatures` and `images`
/// may repeat.
pub fn draft_from_form(form: &FormData) -> DraftListing {
    let mut draft = DraftListing::empty();
    for field in DraftField::ALL {
        if let Some(value) = form.get(field.name()) {
            draft.set_field(field, value);
        }
    }
    for feature in form.get_all("ecoFeatures") {
        if !draft.has_eco_feature(feature) {
            draft.toggle_eco_feature(feature);
        }
    }
    draft.add_images(form.get_all("images"));
    draft
}

/// Rebuild the listing form from a post.
pub fn form_from_post(form: &FormData, cancel_policy: CancelPolicy) -> ListingForm {
    let visibility = match form.get("visible") {
        Some("true") => FormVisibility::Visible,
        _ => FormVisibility::Hidden,
    };
    let editing = form
        .get("editing")
        .filter(|id| !id.is_empty())
        .and_then(|id| id.parse().ok());

    ListingForm::new(cancel_policy)
        .with_state(visibility, draft_from_form(form))
        .with_editing(editing)
}

/// Messages shown after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub notice: Option<String>,
    pub errors: Vec<String>,
}

impl Feedback {
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            notice: Some(message.into()),
            errors: Vec::new(),
        }
    }

    pub fn errors(errors: Vec<String>) -> Self {
        Self {
            notice: None,
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Run `action` against the form and store.
pub fn apply_action(
    action: SellAction,
    form: &mut ListingForm,
    store: &mut dyn ListingStore,
) -> Feedback {
    match action {
        SellAction::Toggle => {
            form.toggle();
            Feedback::default()
        }
        SellAction::Cancel => {
            form.cancel();
            Feedback::default()
        }
        SellAction::Submit => match form.submit(store) {
            Ok(outcome) => Feedback::notice(outcome.message()),
            Err(e) => Feedback::errors(error_messages(&e)),
        },
        SellAction::Edit(id) => match store.get(id).cloned() {
            Some(record) => {
                form.edit(&record);
                Feedback::default()
            }
            None => Feedback::errors(vec![CommerceError::ListingNotFound(id).to_string()]),
        },
        SellAction::Remove(id) => match store.apply(ListingIntent::Remove { id }) {
            Ok(outcome) => Feedback::notice(outcome.message()),
            Err(e) => Feedback::errors(vec![e.to_string()]),
        },
    }
}

fn error_messages(error: &CommerceError) -> Vec<String> {
    match error {
        CommerceError::MissingFields(fields) => fields
            .iter()
            .map(|f| format!("{} is required", f.label()))
            .collect(),
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_sdk::eco_commerce::listing::{InMemoryListingStore, StaticListingStore};

    fn post(body: &str) -> FormData {
        FormData::parse(body)
    }

    const FULL_DRAFT: &str = "visible=true&title=Cork+Board&price=22&category=home&condition=good\
        &description=Pinboard+made+from+cork&ecoFeatures=Recyclable&ecoFeatures=Organic";

    #[test]
    fn test_parse_actions() {
        assert_eq!(SellAction::from_form(&post("action=toggle")).unwrap(), SellAction::Toggle);
        assert_eq!(
            SellAction::from_form(&post("action=edit%3A3")).unwrap(),
            SellAction::Edit(ListingId::new(3))
        );
        assert_eq!(
            SellAction::from_form(&post("action=remove:4")).unwrap(),
            SellAction::Remove(ListingId::new(4))
        );
        assert!(matches!(
            SellAction::from_form(&post("action=remove")),
            Err(WorkloadError::BadRequest(_))
        ));
        assert!(matches!(
            SellAction::from_form(&post("action=remove:abc")),
            Err(WorkloadError::BadRequest(_))
        ));
        assert!(matches!(
            SellAction::from_form(&post("action=toggle:1")),
            Err(WorkloadError::BadRequest(_))
        ));
        assert!(matches!(
            SellAction::from_form(&post("action=publish")),
            Err(WorkloadError::BadRequest(_))
        ));
    }

    #[test]
    fn test_draft_from_form() {
        let draft = draft_from_form(&post(FULL_DRAFT));
        assert_eq!(draft.title, "Cork Board");
        assert_eq!(draft.description, "Pinboard made from cork");
        assert_eq!(draft.eco_features, vec!["Recyclable", "Organic"]);
        assert!(draft.images.is_empty());
    }

    #[test]
    fn test_repeated_feature_counted_once() {
        let draft = draft_from_form(&post("ecoFeatures=Organic&ecoFeatures=Organic"));
        assert_eq!(draft.eco_features, vec!["Organic"]);
    }

    #[test]
    fn test_form_from_post_restores_state() {
        let form = form_from_post(&post("visible=true&editing=2&title=Lamp"), CancelPolicy::PreserveDraft);
        assert!(form.is_visible());
        assert_eq!(form.editing(), Some(ListingId::new(2)));
        assert_eq!(form.draft().title, "Lamp");

        let form = form_from_post(&post("editing="), CancelPolicy::PreserveDraft);
        assert!(!form.is_visible());
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn test_submit_success() {
        let mut store = StaticListingStore::demo();
        let mut form = form_from_post(&post(FULL_DRAFT), CancelPolicy::PreserveDraft);

        let feedback = apply_action(SellAction::Submit, &mut form, &mut store);
        assert_eq!(feedback.notice.as_deref(), Some("Request received"));
        assert!(!form.is_visible());
        assert!(form.draft().is_empty());
    }

    #[test]
    fn test_submit_missing_fields_keeps_form_open() {
        let mut store = StaticListingStore::demo();
        let mut form = form_from_post(&post("visible=true&title=Lamp"), CancelPolicy::PreserveDraft);

        let feedback = apply_action(SellAction::Submit, &mut form, &mut store);
        assert!(form.is_visible());
        assert_eq!(form.draft().title, "Lamp");
        assert_eq!(
            feedback.errors,
            vec![
                "Price is required",
                "Category is required",
                "Condition is required",
                "Description is required",
            ]
        );
    }

    #[test]
    fn test_cancel_then_toggle_restores_draft() {
        let mut store = StaticListingStore::demo();
        let mut form = form_from_post(&post(FULL_DRAFT), CancelPolicy::PreserveDraft);

        apply_action(SellAction::Cancel, &mut form, &mut store);
        assert!(!form.is_visible());
        apply_action(SellAction::Toggle, &mut form, &mut store);
        assert!(form.is_visible());
        assert_eq!(form.draft().title, "Cork Board");
    }

    #[test]
    fn test_edit_prefills_form() {
        let mut store = StaticListingStore::demo();
        let mut form = ListingForm::default();

        apply_action(SellAction::Edit(ListingId::new(2)), &mut form, &mut store);
        assert!(form.is_visible());
        assert_eq!(form.editing(), Some(ListingId::new(2)));
        assert_eq!(form.draft().price, "45.00");

        let feedback = apply_action(SellAction::Edit(ListingId::new(40)), &mut form, &mut store);
        assert_eq!(feedback.errors, vec!["Listing not found: 40"]);
    }

    #[test]
    fn test_remove_with_in_memory_store() {
        let mut store = InMemoryListingStore::demo();
        let mut form = ListingForm::default();

        let feedback = apply_action(SellAction::Remove(ListingId::new(4)), &mut form, &mut store);
        assert_eq!(feedback.notice.as_deref(), Some("Listing 4 removed"));
        assert_eq!(store.listings().len(), 3);
    }

    #[test]
    fn test_remove_keeps_open_draft() {
        let mut store = InMemoryListingStore::demo();
        let body = post("visible=true&editing=&title=Half+typed&action=remove:2");
        let action = SellAction::from_form(&body).unwrap();
        let mut form = form_from_post(&body, CancelPolicy::PreserveDraft);

        apply_action(action, &mut form, &mut store);
        assert!(form.is_visible());
        assert_eq!(form.draft().title, "Half typed");
        assert_eq!(store.listings().len(), 3);
    }

    #[test]
    fn test_form_value_round_trips() {
        for action in [SellAction::Toggle, SellAction::Edit(ListingId::new(7))] {
            let body = FormData::parse(&format!("action={}", action.form_value()));
            assert_eq!(SellAction::from_form(&body).unwrap(), action);
        }
    }
}
