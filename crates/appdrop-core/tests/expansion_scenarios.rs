use appdrop_core::{Catalog, ExpansionTracker, Platform, ReleaseRecord};

fn record(id: &str, platform: Platform) -> ReleaseRecord {
    ReleaseRecord {
        id: id.to_string(),
        name: format!("App {id}"),
        date: "2025-01-01".to_string(),
        download_url: format!("https://example.com/{id}"),
        platform,
        changelog: vec!["Initial build".to_string()],
    }
}

fn expanded_pair(tracker: &ExpansionTracker) -> (bool, bool) {
    (tracker.is_expanded("a"), tracker.is_expanded("b"))
}

#[test]
fn toggling_two_rows_in_sequence() {
    let catalog = Catalog::new(vec![record("a", Platform::Android), record("b", Platform::Ios)]);
    let mut tracker = ExpansionTracker::new();
    assert_eq!(expanded_pair(&tracker), (false, false));

    tracker.toggle("a");
    assert_eq!(expanded_pair(&tracker), (true, false));

    tracker.toggle("b");
    assert_eq!(expanded_pair(&tracker), (true, true));

    tracker.toggle("a");
    assert_eq!(expanded_pair(&tracker), (false, true));

    let rows: Vec<bool> = catalog.rows(&tracker).map(|row| row.is_expanded).collect();
    assert_eq!(rows, vec![false, true]);
}

#[test]
fn toggling_an_unknown_id_is_harmless() {
    let catalog = Catalog::new(vec![record("a", Platform::Android), record("b", Platform::Ios)]);
    let mut tracker = ExpansionTracker::new();

    let expanded = tracker.toggle("unknown-id");

    assert!(expanded);
    assert!(tracker.is_expanded("unknown-id"));
    assert_eq!(tracker.len(), 1);
    assert!(catalog.rows(&tracker).all(|row| !row.is_expanded));
}

#[test]
fn toggle_negates_membership_for_any_id() {
    let ids = ["a", "b", "", " ", "pz-ios-2.4.0", "ünïcode"];
    let mut tracker = ExpansionTracker::new();

    for id in ids {
        let before = tracker.is_expanded(id);
        tracker.toggle(id);
        assert_eq!(tracker.is_expanded(id), !before);
    }

    for id in ids {
        let others_before: Vec<bool> = ids
            .iter()
            .filter(|other| **other != id)
            .map(|other| tracker.is_expanded(other))
            .collect();
        tracker.toggle(id);
        let others_after: Vec<bool> = ids
            .iter()
            .filter(|other| **other != id)
            .map(|other| tracker.is_expanded(other))
            .collect();
        assert_eq!(others_before, others_after, "toggling {id:?} leaked");
    }
}
