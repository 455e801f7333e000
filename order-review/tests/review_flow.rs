//! End-to-end review screen flows against a file-backed store

use order_review::shared::models::{Catalog, DEFAULT_ORDER_DATA, Order, OrderOptions};
use order_review::{
    KeyValueStore, Navigation, ORDER_DETAILS_KEY, OrderOptionStore, RedbStore, ReviewScreen,
    TimingChoice,
};

fn catalog() -> Catalog {
    serde_json::from_str(
        r#"[
            {"id": "kfc", "name": "KFC", "items": [
                {"id": "lunch", "name": "Lunch box", "image": "lunch.png",
                 "description": "Wings and a drink",
                 "foods": [{"id": "a"}, {"id": "c"}]},
                {"id": "empty", "name": "Nothing here"}
            ]},
            {"id": "bk", "name": "Burger King", "items": []}
        ]"#,
    )
    .unwrap()
}

fn order() -> Order {
    serde_json::from_str(
        r#"{
            "e1": {"item": {"id": "a", "name": "Wings", "price": "150"}, "count": 2},
            "e2": {"item": {"id": "b", "name": "Cola", "price": "90"}, "count": 1},
            "e3": {"item": {"id": "c", "name": "Pie", "price": 1250}, "count": "1"}
        }"#,
    )
    .unwrap()
}

fn mount(store: RedbStore, item: &str) -> ReviewScreen<RedbStore> {
    ReviewScreen::mount(OrderOptionStore::new(store), &catalog(), "kfc", item).unwrap()
}

#[test]
fn review_only_counts_the_selected_items_foods() {
    let store = RedbStore::open_in_memory().unwrap();
    let screen = mount(store, "lunch");
    let order = order();

    let review = screen.review(&order);
    let ids: Vec<&str> = review.entries.iter().map(|l| l.entry_id).collect();
    assert_eq!(ids, vec!["e1", "e3"]);
    assert_eq!(review.total, 1550);
    assert_eq!(review.formatted_total, "1 550");
}

#[test]
fn item_without_foods_has_empty_review() {
    let store = RedbStore::open_in_memory().unwrap();
    let screen = mount(store, "empty");
    let order = order();

    let review = screen.review(&order);
    assert!(review.entries.is_empty());
    assert_eq!(review.formatted_total, "0");
}

#[test]
fn unknown_area_fails_fast() {
    let store = RedbStore::open_in_memory().unwrap();
    let err = ReviewScreen::mount(OrderOptionStore::new(store), &catalog(), "nope", "lunch")
        .unwrap_err();
    assert_eq!(err.to_string(), "Area not found: nope");
}

#[test]
fn edits_survive_a_trip_to_the_product_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("screen.redb");

    {
        let mut screen = mount(RedbStore::open(&path).unwrap(), "lunch");
        screen.focus_time();
        screen.edit_time("9");
        screen.edit_time("93");
        screen.edit_time("930");
        screen.blur_time();
        screen.toggle_takeaway();

        let nav = screen.edit_products().unwrap();
        assert_eq!(
            nav,
            Navigation::EditProducts {
                area_id: "kfc".into(),
                item_id: "lunch".into()
            }
        );
    }

    // Coming back to the review screen later
    let screen = mount(RedbStore::open(&path).unwrap(), "lunch");
    assert_eq!(
        screen.options(),
        OrderOptions {
            faster: false,
            time: "09:30".into(),
            self_service: true,
        }
    );
    assert!(screen.details().takeaway_checked());
    assert!(!screen.details().dine_in_checked());
}

#[test]
fn checkout_leaves_defaults_for_the_next_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("screen.redb");

    {
        let mut screen = mount(RedbStore::open(&path).unwrap(), "lunch");
        screen.edit_time("2000");
        screen.toggle_dine_in();
        screen.edit_products().unwrap();
    }
    {
        let mut screen = mount(RedbStore::open(&path).unwrap(), "lunch");
        assert_eq!(screen.options().time, "20:00");
        assert_eq!(screen.checkout().unwrap().route(), "/order/kfc/lunch");
    }

    let screen = mount(RedbStore::open(&path).unwrap(), "lunch");
    assert_eq!(screen.options(), DEFAULT_ORDER_DATA);
}

#[test]
fn out_of_range_time_falls_back() {
    let store = RedbStore::open_in_memory().unwrap();
    let mut screen = mount(store, "lunch");
    screen.edit_time("9999");
    assert_eq!(screen.options().time, "23:59");
    assert!(!screen.options().faster);
}

#[test]
fn asap_toggle_clears_a_chosen_time() {
    let store = RedbStore::open_in_memory().unwrap();
    let mut screen = mount(store, "lunch");
    screen.edit_time("14:30");
    screen.toggle_asap();

    assert_eq!(screen.details().timing, TimingChoice::Asap);
    let options = screen.options();
    assert!(options.faster);
    assert_eq!(options.time, "");
}

#[test]
fn garbage_snapshot_from_an_older_client_is_ignored() {
    let mut store = RedbStore::open_in_memory().unwrap();
    store.set(ORDER_DETAILS_KEY, "{\"faster\": \"yes\"").unwrap();

    let screen = mount(store.clone(), "lunch");
    assert_eq!(screen.options(), DEFAULT_ORDER_DATA);
    // Left in place until the next explicit write
    assert!(store.get(ORDER_DETAILS_KEY).unwrap().is_some());
}

#[test]
fn null_price_and_bool_count_still_render_a_total() {
    let order: Order = serde_json::from_str(
        r#"{
            "e1": {"item": {"id": "a", "name": "Wings", "price": null}, "count": 2},
            "e2": {"item": {"id": "c", "name": "Pie", "price": "0x1A"}, "count": true},
            "e3": {"item": {"id": "c", "name": "Pie", "price": 1250}, "count": "1"}
        }"#,
    )
    .unwrap();

    let screen = mount(RedbStore::open_in_memory().unwrap(), "lunch");
    let review = screen.review(&order);
    assert_eq!(review.entries.len(), 3);
    assert_eq!(review.total, 1250);
    assert_eq!(review.formatted_total, "1 250");
}

#[test]
fn home_leaves_stored_options_untouched() {
    let store = RedbStore::open_in_memory().unwrap();
    let mut screen = mount(store.clone(), "lunch");
    screen.edit_time("1200");

    assert_eq!(screen.home().route(), "/");
    assert!(store.get(ORDER_DETAILS_KEY).unwrap().is_none());
}
