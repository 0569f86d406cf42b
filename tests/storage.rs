// Storage layer tests against an in-memory SQLite database

mod common;

#[path = "storage/habits.rs"]
mod habits;
#[path = "storage/tasks.rs"]
mod tasks;

use focusdeck::storage::LocalStorage;
use focusdeck::store::Store;

#[tokio::test]
async fn test_file_database_persists_between_opens() {
    let dir = std::env::temp_dir().join(format!("focusdeck_storage_{}", uuid::Uuid::new_v4()));
    let path = dir.join("nested").join("focusdeck.db");

    {
        let storage = LocalStorage::new(Some(&path)).await.unwrap();
        common::seed_task(&storage, "alice", "Persisted", focusdeck::models::TaskStatus::Pending).await;
    }
    assert!(path.exists(), "database file should be created along with its directory");

    let reopened = LocalStorage::new(Some(&path)).await.unwrap();
    let tasks = reopened.list_tasks("alice").await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Persisted");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let storage = common::storage().await;
    assert!(storage.list_tasks("nobody").await.unwrap().is_empty());
    assert!(storage.list_notes("nobody").await.unwrap().is_empty());
    assert!(storage.list_habits("nobody").await.unwrap().is_empty());
}
