//! Tests for the in-memory record store.
//!
//! These pin the observable store semantics the web crate's handlers
//! rely on: insertion order, count-returning updates and deletes, and
//! first-match deletion.

use rolodex_db::models::record::{NewRecord, Record, RecordPatch};
use rolodex_db::store::{MemoryStore, RecordStore};
use rolodex_db::ObjectId;

fn new_record(name: &str, email: &str, phone: &str) -> NewRecord {
    NewRecord {
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
    }
}

fn patch(name: &str, email: &str, phone: &str) -> RecordPatch {
    RecordPatch {
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
    }
}

// ---------------------------------------------------------------------------
// Test: insert assigns a unique id and list preserves insertion order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_assigns_unique_ids_and_list_preserves_order() {
    let store = MemoryStore::new();

    let first = store
        .insert(new_record("Alice", "a@x.com", "555"))
        .await
        .unwrap();
    let second = store
        .insert(new_record("Bob", "b@x.com", "556"))
        .await
        .unwrap();

    assert_ne!(first, second);

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Alice");
    assert_eq!(records[0].id, Some(first));
    assert_eq!(records[1].name, "Bob");
    assert_eq!(records[1].id, Some(second));
}

// ---------------------------------------------------------------------------
// Test: update matches exactly the target record and keeps its id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_only_the_target_record() {
    let store = MemoryStore::new();
    let alice = store
        .insert(new_record("Alice", "a@x.com", "555"))
        .await
        .unwrap();
    let bob = store
        .insert(new_record("Bob", "b@x.com", "556"))
        .await
        .unwrap();

    let matched = store
        .update_by_id(alice, patch("Alice B", "a@x.com", "555"))
        .await
        .unwrap();
    assert_eq!(matched, 1);

    let records = store.list_all().await.unwrap();
    assert_eq!(records[0].name, "Alice B");
    assert_eq!(records[0].id, Some(alice), "id must be immutable");
    assert_eq!(records[1].name, "Bob", "other records untouched");
    assert_eq!(records[1].id, Some(bob));
}

// ---------------------------------------------------------------------------
// Test: update with an unknown id matches nothing and mutates nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_with_unknown_id_matches_nothing() {
    let store = MemoryStore::new();
    store
        .insert(new_record("Alice", "a@x.com", "555"))
        .await
        .unwrap();

    let matched = store
        .update_by_id(ObjectId::new(), patch("X", "x@x.com", "0"))
        .await
        .unwrap();
    assert_eq!(matched, 0);

    let records = store.list_all().await.unwrap();
    assert_eq!(records[0].name, "Alice");
}

// ---------------------------------------------------------------------------
// Test: delete removes the first match only, even with duplicates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_first_match_only() {
    let store = MemoryStore::new();
    let first = store
        .insert(new_record("Dup", "first@x.com", "1"))
        .await
        .unwrap();
    let second = store
        .insert(new_record("Dup", "second@x.com", "2"))
        .await
        .unwrap();

    let deleted = store.delete_first_by_field("name", "Dup").await.unwrap();
    assert_eq!(deleted, 1);

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, Some(second), "first match is the one removed");
    assert_ne!(records[0].id, Some(first));
}

// ---------------------------------------------------------------------------
// Test: delete with no match or an unknown field deletes nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_with_no_match_deletes_nothing() {
    let store = MemoryStore::new();
    store
        .insert(new_record("Alice", "a@x.com", "555"))
        .await
        .unwrap();

    let deleted = store.delete_first_by_field("name", "Bob").await.unwrap();
    assert_eq!(deleted, 0);

    let deleted = store
        .delete_first_by_field("no-such-field", "Alice")
        .await
        .unwrap();
    assert_eq!(deleted, 0);

    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: delete can key on any document field, including the id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_can_key_on_id_hex() {
    let store = MemoryStore::new();
    let alice = store
        .insert(new_record("Alice", "a@x.com", "555"))
        .await
        .unwrap();

    let deleted = store
        .delete_first_by_field("_id", &alice.to_hex())
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    assert!(store.list_all().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: seeded stores list their seed records
// ---------------------------------------------------------------------------

#[tokio::test]
async fn with_records_seeds_the_store() {
    let record = Record {
        id: Some(ObjectId::new()),
        name: "Seeded".into(),
        email: "s@x.com".into(),
        phone: "7".into(),
    };
    let store = MemoryStore::with_records(vec![record.clone()]);

    assert_eq!(store.list_all().await.unwrap(), vec![record]);
    assert!(store.ping().await.is_ok());
}
