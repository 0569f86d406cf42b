use focusdeck::error::StoreError;
use focusdeck::store::{NewNote, NotePatch, Store};

use super::common::storage;

fn new_note(title: &str, tags: &[&str]) -> NewNote {
    NewNote {
        title: title.to_string(),
        content: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_new_note_timestamps_match() {
    let storage = storage().await;
    let note = storage.insert_note("alice", new_note("Untitled Note", &[])).await.unwrap();
    assert_eq!(note.created_at, note.updated_at);
    assert!(note.tags.is_empty());
}

#[tokio::test]
async fn test_tags_round_trip_in_order() {
    let storage = storage().await;
    let note = storage
        .insert_note("alice", new_note("Weekly Review", &["review", "goals"]))
        .await
        .unwrap();

    let stored = storage.list_notes("alice").await.unwrap();
    assert_eq!(stored[0].id, note.id);
    assert_eq!(stored[0].tags, vec!["review".to_string(), "goals".to_string()]);
}

#[tokio::test]
async fn test_update_refreshes_updated_at() {
    let storage = storage().await;
    let note = storage.insert_note("alice", new_note("Draft", &[])).await.unwrap();

    let updated = storage
        .update_note(
            &note.id,
            NotePatch {
                content: Some("Body text".to_string()),
                tags: Some(vec!["ideas".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.content, "Body text");
    assert_eq!(updated.tags, vec!["ideas".to_string()]);
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at >= note.updated_at);
}

#[tokio::test]
async fn test_notes_are_scoped_and_newest_first() {
    let storage = storage().await;
    let older = storage.insert_note("alice", new_note("Older", &[])).await.unwrap();
    let newer = storage.insert_note("alice", new_note("Newer", &[])).await.unwrap();
    storage.insert_note("bob", new_note("Bob's", &[])).await.unwrap();

    let ids: Vec<String> = storage
        .list_notes("alice")
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[tokio::test]
async fn test_update_unknown_note_is_not_found() {
    let storage = storage().await;
    let result = storage.update_note("missing", NotePatch::default()).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}
