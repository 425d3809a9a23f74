use pretty_assertions::assert_eq;
use slotsync_store::document::{SlotDocument, WireDate, WireSlot};
use slotsync_store::memory::MemoryStore;
use slotsync_store::SlotStore;

fn document(dates_and_hours: &[(&str, u8)]) -> SlotDocument {
    SlotDocument {
        slots: dates_and_hours
            .iter()
            .map(|&(date, hour)| WireSlot {
                date: WireDate::Text(date.to_string()),
                hour,
            })
            .collect(),
    }
}

#[tokio::test]
async fn test_subscribe_to_missing_namespace_starts_empty() {
    let store = MemoryStore::new();

    let feed = store.subscribe("teacher").await.unwrap();

    assert_eq!(*feed.borrow(), None);
}

#[tokio::test]
async fn test_subscribe_after_write_sees_current_document() {
    let store = MemoryStore::new();
    let doc = document(&[("2026-01-04", 21)]);

    store.write("teacher", doc.clone()).await.unwrap();
    let feed = store.subscribe("teacher").await.unwrap();

    assert_eq!(*feed.borrow(), Some(doc));
}

#[tokio::test]
async fn test_write_notifies_existing_subscriber() {
    let store = MemoryStore::new();
    let mut feed = store.subscribe("teacher").await.unwrap();
    let doc = document(&[("2026-01-04", 21), ("2026-01-05", 9)]);

    store.write("teacher", doc.clone()).await.unwrap();

    feed.changed().await.unwrap();
    assert_eq!(*feed.borrow_and_update(), Some(doc));
}

#[tokio::test]
async fn test_later_write_wins_wholesale() {
    let store = MemoryStore::new();
    let mut feed = store.subscribe("teacher").await.unwrap();

    store
        .write("teacher", document(&[("2026-01-04", 21)]))
        .await
        .unwrap();
    let replacement = document(&[("2026-02-01", 9)]);
    store.write("teacher", replacement.clone()).await.unwrap();

    feed.changed().await.unwrap();
    // The feed conflates to the latest state; the first write is gone.
    assert_eq!(*feed.borrow_and_update(), Some(replacement));
}

#[tokio::test]
async fn test_fan_out_reaches_every_subscriber() {
    let store = MemoryStore::new();
    let mut first = store.subscribe("teacher").await.unwrap();
    let mut second = store.subscribe("teacher").await.unwrap();
    let doc = document(&[("2026-01-04", 21)]);

    store.write("teacher", doc.clone()).await.unwrap();

    first.changed().await.unwrap();
    second.changed().await.unwrap();
    assert_eq!(*first.borrow_and_update(), Some(doc.clone()));
    assert_eq!(*second.borrow_and_update(), Some(doc));
}

#[tokio::test]
async fn test_namespaces_are_independent_documents() {
    let store = MemoryStore::new();
    let doc = document(&[("2026-01-04", 21)]);

    store.write("teacher", doc.clone()).await.unwrap();

    let teacher = store.subscribe("teacher").await.unwrap();
    let other = store.subscribe("another-teacher").await.unwrap();
    assert_eq!(*teacher.borrow(), Some(doc));
    assert_eq!(*other.borrow(), None);
}
