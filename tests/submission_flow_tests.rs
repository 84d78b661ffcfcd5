// End-to-end submission flow: submit, blend with the remote feed,
// persist, reload.
use chrono::Utc;
use freebites::context::TestContext;
use freebites::model::filter::{FilterState, SortKey};
use freebites::model::normalize::RawEvent;
use freebites::store::EventStore;
use std::sync::Arc;

fn raw(title: &str, start: &str) -> RawEvent {
    RawEvent {
        title: Some(title.to_string()),
        start: Some(start.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_minimal_submission_gets_defaults() {
    let mut store = EventStore::new(Arc::new(TestContext::new()));
    let event = store
        .submit(raw("Leftover sandwiches", "2026-03-05T13:00:00Z"))
        .unwrap();

    assert!(!event.id.is_empty());
    assert_eq!(event.title, "Leftover sandwiches");
    assert_eq!(event.host, "");
    assert_eq!(event.campus, "");
    assert_eq!(event.category, "");
    assert!(event.end.is_none());
}

#[test]
fn test_submission_sorts_among_remote_events() {
    let mut store = EventStore::new(Arc::new(TestContext::new()));
    store.set_remote_raw(vec![
        raw("Early remote", "2026-03-04T09:00:00Z"),
        raw("Late remote", "2026-03-06T18:00:00Z"),
    ]);
    store
        .submit(raw("My midday bake sale", "2026-03-05T12:00:00Z"))
        .unwrap();

    let filters = FilterState {
        sort: SortKey::Soonest,
        ..Default::default()
    };
    let view = store.filtered(&filters, &Utc);
    let titles: Vec<&str> = view.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Early remote", "My midday bake sale", "Late remote"]);
}

#[test]
fn test_submissions_persist_across_store_instances() {
    let ctx = Arc::new(TestContext::new());

    let mut first = EventStore::new(ctx.clone());
    first
        .submit(raw("Persisted pizza", "2026-03-05T18:00:00Z"))
        .unwrap();
    first
        .submit(raw("Persisted bagels", "2026-03-06T09:00:00Z"))
        .unwrap();

    let mut second = EventStore::new(ctx.clone());
    second.load_local();
    assert_eq!(second.local.len(), 2);
    assert_eq!(second.local[0].title, "Persisted pizza");
    // Ids assigned at submission time survive the round trip.
    assert_eq!(second.local[0].id, first.local[0].id);
}

#[test]
fn test_clear_local_removes_memory_and_disk() {
    let ctx = Arc::new(TestContext::new());

    let mut store = EventStore::new(ctx.clone());
    store
        .submit(raw("Doomed donuts", "2026-03-05T15:00:00Z"))
        .unwrap();
    store.clear_local().unwrap();
    assert!(store.local.is_empty());

    let mut reloaded = EventStore::new(ctx.clone());
    reloaded.load_local();
    assert!(reloaded.local.is_empty());
}

#[test]
fn test_remote_refresh_leaves_submissions_alone() {
    let mut store = EventStore::new(Arc::new(TestContext::new()));
    store
        .submit(raw("Mine", "2026-03-05T12:00:00Z"))
        .unwrap();
    store.set_remote_raw(vec![raw("Feed v1", "2026-03-04T10:00:00Z")]);
    store.set_remote_raw(vec![raw("Feed v2", "2026-03-04T11:00:00Z")]);

    assert_eq!(store.remote.len(), 1);
    assert_eq!(store.local.len(), 1);
    assert_eq!(store.union().len(), 2);
}
