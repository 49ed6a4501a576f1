//! End-to-end behavior of the catalog pipeline and the listing form.

use eco_commerce::prelude::*;

fn record(title: &str, rating: &str) -> ProductRecord {
    ProductRecord::new(title, "$10.00", rating)
}

fn filled_form() -> ListingForm {
    let mut form = ListingForm::default();
    form.open();
    let draft = form.draft_mut();
    draft.set_named_field("title", "Upcycled Denim Jacket").unwrap();
    draft.set_named_field("price", "55").unwrap();
    draft.set_named_field("category", "fashion").unwrap();
    draft.set_named_field("condition", "good").unwrap();
    draft.set_named_field("description", "Patched with offcuts.").unwrap();
    draft.toggle_eco_feature("Upcycled");
    form
}

#[test]
fn test_toggle_feature_twice_restores_membership() {
    let mut draft = DraftListing::empty();
    for feature in ["Organic", "Fair trade", "Compostable"] {
        draft.toggle_eco_feature(feature);
    }
    let original = draft.eco_features.clone();

    for feature in LISTING_ECO_FEATURES {
        let was_selected = draft.has_eco_feature(feature);
        draft.toggle_eco_feature(feature);
        assert_ne!(draft.has_eco_feature(feature), was_selected);
        draft.toggle_eco_feature(feature);
        assert_eq!(draft.has_eco_feature(feature), was_selected);
    }

    // Re-added features move to the end.
    let mut restored = draft.eco_features.clone();
    let mut expected = original.clone();
    restored.sort();
    expected.sort();
    assert_eq!(restored, expected);

    draft.toggle_eco_feature("Fair trade");
    assert_eq!(draft.eco_features.len(), 2);
    draft.toggle_eco_feature("Fair trade");
    assert_eq!(draft.eco_features.last().map(String::as_str), Some("Fair trade"));
}

#[test]
fn test_submit_resets_draft_and_hides_form() {
    let mut store = StaticListingStore::demo();
    let mut form = filled_form();

    form.submit(&mut store).unwrap();

    assert_eq!(form.draft(), &DraftListing::empty());
    assert_eq!(form.visibility(), FormVisibility::Hidden);
}

#[test]
fn test_sort_by_rating_puts_unrated_last() {
    let mut decorator = ScriptedDecorator::new(vec![Decoration::new(3, 1, CatalogCategory::Home)]);
    let catalog = Catalog::with_decorator(
        vec![record("a", "4.5"), record("b", "N/A"), record("c", "3.0")],
        &mut decorator,
    );

    let ratings: Vec<String> = catalog
        .browse(&BrowseQuery::new(CategoryFilter::All, SortKey::Rating))
        .into_iter()
        .map(|p| p.record.rating)
        .collect();
    assert_eq!(ratings, vec!["4.5", "3.0", "N/A"]);
}

#[test]
fn test_electronics_filter_keeps_only_electronics() {
    let mut decorator = ScriptedDecorator::new(vec![
        Decoration::new(4, 1, CatalogCategory::Electronics),
        Decoration::new(4, 1, CatalogCategory::Clothing),
        Decoration::new(2, 2, CatalogCategory::Electronics),
        Decoration::new(5, 3, CatalogCategory::Beauty),
    ]);
    let catalog = Catalog::with_decorator(
        vec![
            record("solar charger", "4.2"),
            record("hemp shirt", "4.0"),
            record("led bulbs", "3.9"),
            record("shampoo bar", "4.1"),
        ],
        &mut decorator,
    );

    let query = BrowseQuery::from_params(Some("electronics"), Some("none"));
    let view = catalog.browse(&query);
    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|p| p.category() == CatalogCategory::Electronics));
    assert_eq!(view[0].record.title, "solar charger");
    assert_eq!(view[1].record.title, "led bulbs");
}

#[test]
fn test_list_new_product_then_cancel_keeps_draft() {
    let mut form = ListingForm::default();
    assert_eq!(form.visibility(), FormVisibility::Hidden);

    form.toggle();
    assert_eq!(form.visibility(), FormVisibility::Visible);

    form.draft_mut().set_field(DraftField::Title, "Half-typed title");
    form.draft_mut().toggle_eco_feature("Recyclable");
    let before = form.draft().clone();

    form.cancel();
    assert_eq!(form.visibility(), FormVisibility::Hidden);
    assert_eq!(form.draft(), &before);
}

#[test]
fn test_two_feature_decoration_uses_first_two_canonical() {
    let mut decorator = ScriptedDecorator::new(vec![Decoration::new(4, 2, CatalogCategory::Sports)]);
    let catalog = Catalog::with_decorator(vec![record("yoga mat", "4.6")], &mut decorator);

    let product = &catalog.decorated()[0];
    assert_eq!(product.eco_features(), &CATALOG_ECO_FEATURES[..2]);
}

#[test]
fn test_stable_catalog_same_view_across_renders() {
    let catalog = Catalog::from_default_fixture(DecorationMode::Stable, 2024).unwrap();
    let query = BrowseQuery::from_params(Some("all"), Some("sustainability"));
    assert_eq!(catalog.browse(&query), catalog.browse(&query));

    let scores: Vec<u8> = catalog.browse(&query).iter().map(|p| p.score().get()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_filter_views_partition_catalog() {
    let catalog = Catalog::from_default_fixture(DecorationMode::Stable, 5).unwrap();
    let total: usize = CatalogCategory::ALL
        .into_iter()
        .map(|c| catalog.browse(&BrowseQuery::new(CategoryFilter::Only(c), SortKey::Rating)).len())
        .sum();
    assert_eq!(total, catalog.len());
    assert_eq!(catalog.browse(&BrowseQuery::default()).len(), catalog.len());
}

#[test]
fn test_seller_stats_from_demo_listings() {
    let stats = StaticListingStore::demo().stats();
    assert_eq!(stats.products_listed, 4);
    assert_eq!(stats.items_sold, 1);
    assert_eq!(stats.total_views, 436);
    assert_eq!(stats.total_likes, 62);
}

#[test]
fn test_in_memory_submit_adds_listing() {
    let mut store = InMemoryListingStore::demo();
    let mut form = filled_form();

    let outcome = form.submit(&mut store).unwrap();
    assert_eq!(outcome, IntentOutcome::Created(ListingId::new(5)));
    assert_eq!(store.stats().products_listed, 5);
    assert_eq!(store.listings()[4].category, ListingCategory::Fashion);
}
