use focusdeck::error::StoreError;
use focusdeck::models::TaskStatus;
use focusdeck::store::{Store, TaskPatch};

use super::common::{seed_task, storage};

#[tokio::test]
async fn test_insert_assigns_id_and_timestamp() {
    let storage = storage().await;
    let before = chrono::Utc::now();
    let task = seed_task(&storage, "alice", "Write report", TaskStatus::Pending).await;

    assert!(!task.id.is_empty());
    assert_eq!(task.title, "Write report");
    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.created_at >= before);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let storage = storage().await;
    let first = seed_task(&storage, "alice", "First", TaskStatus::Pending).await;
    let second = seed_task(&storage, "alice", "Second", TaskStatus::InProgress).await;
    let third = seed_task(&storage, "alice", "Third", TaskStatus::Completed).await;

    let ids: Vec<String> = storage
        .list_tasks("alice")
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn test_list_is_scoped_by_owner() {
    let storage = storage().await;
    seed_task(&storage, "alice", "Alice's task", TaskStatus::Pending).await;
    seed_task(&storage, "bob", "Bob's task", TaskStatus::Pending).await;

    let tasks = storage.list_tasks("alice").await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Alice's task");
}

#[tokio::test]
async fn test_update_changes_only_patched_fields() {
    let storage = storage().await;
    let task = seed_task(&storage, "alice", "Review PR", TaskStatus::Pending).await;

    let updated = storage
        .update_task(
            &task.id,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, task.id);
    assert_eq!(updated.title, "Review PR");
    assert_eq!(updated.status, TaskStatus::Completed);
    assert_eq!(updated.created_at, task.created_at);

    let stored = storage.list_tasks("alice").await.unwrap();
    assert_eq!(stored[0].status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let storage = storage().await;
    let result = storage
        .update_task(
            "missing",
            TaskPatch {
                title: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}
