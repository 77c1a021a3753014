//! Category name normalization as seen through the public API.

use kafka_metrics_schema::RequestCategory;
use kafka_metrics_schema::normalize_category;
use kafka_metrics_schema::request::source::BUILTIN_REQUEST_CATEGORIES;

#[test]
fn builtin_names_normalize_to_snake_case() {
    let prefixes: Vec<String> = BUILTIN_REQUEST_CATEGORIES
        .iter()
        .map(|name| normalize_category(name))
        .collect();
    assert_eq!(
        prefixes,
        [
            "consumer_metadata",
            "controlled_shutdown",
            "fetch",
            "fetch_consumer",
            "fetch_follower",
            "heartbeat",
            "join_group",
            "leader_and_isr",
            "metadata",
            "offset_commit",
            "offset_fetch",
            "offsets",
            "produce",
            "stop_replica",
            "update_metadata",
        ]
    );
}

#[test]
fn acronym_runs_stay_together() {
    assert_eq!(normalize_category("ISRShrink"), "isrshrink");
    assert_eq!(normalize_category("FetchISR"), "fetch_isr");
}

#[test]
fn digits_do_not_start_a_word() {
    assert_eq!(normalize_category("Fetch2Follower"), "fetch2follower");
}

#[test]
fn category_prefix_matches_normalizer() {
    for name in BUILTIN_REQUEST_CATEGORIES {
        let category = RequestCategory::new(*name).unwrap();
        assert_eq!(category.prefix(), normalize_category(name));
        assert_eq!(category.name(), *name);
    }
}
