// Task board behavior against a real in-memory store

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use common::{alice, seed_task, storage, FailingStore, ReadOnlyStore, RecordingNotifier};
use focusdeck::board::{LanePosition, RelocationEvent, TaskBoard};
use focusdeck::models::TaskStatus;
use focusdeck::store::Store;

/// Board over a store seeded with 2 pending, 2 in-progress and 1 completed task
async fn seeded_board() -> (TaskBoard, Arc<focusdeck::storage::LocalStorage>, Arc<RecordingNotifier>) {
    let storage = storage().await;
    let owner = alice().id;
    for (title, status) in [
        ("Design landing page", TaskStatus::Pending),
        ("Write API docs", TaskStatus::Pending),
        ("Fix login bug", TaskStatus::InProgress),
        ("Update dependencies", TaskStatus::InProgress),
        ("Set up CI", TaskStatus::Completed),
    ] {
        seed_task(&storage, &owner, title, status).await;
    }

    let notifier = RecordingNotifier::new();
    let mut board = TaskBoard::new(storage.clone(), Some(alice()), notifier.clone());
    assert!(board.load().await);
    (board, storage, notifier)
}

fn lane_sizes(board: &TaskBoard) -> [usize; 3] {
    TaskStatus::ALL.map(|status| board.lane(status).len())
}

#[tokio::test]
async fn test_load_groups_tasks_into_lanes() {
    let (board, _, _) = seeded_board().await;

    assert!(!board.is_loading());
    assert_eq!(board.tasks().len(), 5);
    assert_eq!(lane_sizes(&board), [2, 2, 1]);

    let ids: HashSet<&str> = board.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 5, "task ids are unique");

    // Lanes partition the collection
    let lanes = board.lanes();
    assert_eq!(lanes.iter().map(|(_, tasks)| tasks.len()).sum::<usize>(), board.tasks().len());
}

#[tokio::test]
async fn test_lanes_keep_board_order() {
    let (board, _, _) = seeded_board().await;
    let pending: Vec<&str> = board.lane(TaskStatus::Pending).iter().map(|t| t.title.as_str()).collect();
    assert_eq!(pending, vec!["Write API docs", "Design landing page"]);
}

#[tokio::test]
async fn test_add_puts_pending_task_at_head() {
    let (mut board, storage, notifier) = seeded_board().await;

    let id = board.add("  Plan sprint  ").await.expect("task added");

    assert_eq!(board.tasks().len(), 6);
    assert_eq!(board.tasks()[0].id, id);
    assert_eq!(board.tasks()[0].title, "Plan sprint");
    assert_eq!(board.tasks()[0].status, TaskStatus::Pending);
    assert_eq!(lane_sizes(&board), [3, 2, 1]);
    assert_eq!(board.lane(TaskStatus::Pending)[0].id, id);
    assert_eq!(notifier.successes(), vec!["Task added".to_string()]);

    let stored = storage.list_tasks(&alice().id).await.unwrap();
    assert_eq!(stored.len(), 6);
    assert_eq!(stored[0].id, id);
}

#[tokio::test]
async fn test_blank_title_is_ignored() {
    let (mut board, storage, notifier) = seeded_board().await;

    assert!(board.add("").await.is_none());
    assert!(board.add("   ").await.is_none());

    assert_eq!(board.tasks().len(), 5);
    assert_eq!(storage.list_tasks(&alice().id).await.unwrap().len(), 5);
    assert!(notifier.events().is_empty());
}

#[tokio::test]
async fn test_set_status_changes_only_target() {
    let (mut board, storage, _) = seeded_board().await;
    let before = board.tasks().to_vec();
    let target = board.lane(TaskStatus::Pending)[0].id.clone();

    assert!(board.set_status(&target, TaskStatus::Completed).await);

    for (old, new) in before.iter().zip(board.tasks()) {
        assert_eq!(old.id, new.id, "order is unchanged");
        if old.id == target {
            assert_eq!(new.status, TaskStatus::Completed);
            assert_eq!(new.title, old.title);
        } else {
            assert_eq!(old, new);
        }
    }
    assert_eq!(lane_sizes(&board), [1, 2, 2]);

    let stored = storage.list_tasks(&alice().id).await.unwrap();
    let stored_target = stored.iter().find(|t| t.id == target).unwrap();
    assert_eq!(stored_target.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_set_status_to_current_is_noop() {
    let (mut board, _, notifier) = seeded_board().await;
    let target = board.lane(TaskStatus::InProgress)[0].id.clone();

    assert!(!board.set_status(&target, TaskStatus::InProgress).await);
    assert!(!board.set_status("unknown", TaskStatus::Completed).await);
    assert!(notifier.events().is_empty());
}

#[tokio::test]
async fn test_drag_from_progress_to_completed() {
    let (mut board, _, notifier) = seeded_board().await;
    let dragged = board.lane(TaskStatus::InProgress)[1].id.clone();
    let source = board.position_of(&dragged).unwrap();
    assert_eq!(source, LanePosition::new(TaskStatus::InProgress, 1));

    let event = RelocationEvent {
        task_id: dragged.clone(),
        source,
        destination: Some(LanePosition::new(TaskStatus::Completed, 0)),
    };
    assert!(board.relocate(&event).await);

    assert_eq!(board.get(&dragged).unwrap().status, TaskStatus::Completed);
    assert_eq!(lane_sizes(&board), [2, 1, 2]);
    assert_eq!(notifier.successes(), vec!["Task updated".to_string()]);
}

#[tokio::test]
async fn test_cancelled_or_same_slot_drag_is_noop() {
    let (mut board, _, notifier) = seeded_board().await;
    let before = board.tasks().to_vec();
    let dragged = board.lane(TaskStatus::Pending)[1].id.clone();
    let source = board.position_of(&dragged).unwrap();

    let cancelled = RelocationEvent {
        task_id: dragged.clone(),
        source,
        destination: None,
    };
    assert!(!board.relocate(&cancelled).await);

    let same_slot = RelocationEvent {
        task_id: dragged,
        source,
        destination: Some(source),
    };
    assert!(!board.relocate(&same_slot).await);

    assert_eq!(board.tasks(), before.as_slice());
    assert!(notifier.events().is_empty());
}

#[tokio::test]
async fn test_failed_update_leaves_board_unchanged() {
    let storage = storage().await;
    let task = seed_task(&storage, &alice().id, "Ship release", TaskStatus::Pending).await;
    let notifier = RecordingNotifier::new();
    let store = Arc::new(ReadOnlyStore { inner: storage });
    let mut board = TaskBoard::new(store, Some(alice()), notifier.clone());
    board.load().await;

    assert!(!board.set_status(&task.id, TaskStatus::Completed).await);

    assert_eq!(board.get(&task.id).unwrap().status, TaskStatus::Pending);
    assert_eq!(notifier.errors(), vec!["Failed to update task".to_string()]);
}

#[tokio::test]
async fn test_failed_add_and_load_report_errors() {
    let notifier = RecordingNotifier::new();
    let mut board = TaskBoard::new(Arc::new(FailingStore), Some(alice()), notifier.clone());

    assert!(!board.load().await);
    assert!(board.is_loading());
    assert!(board.add("Anything").await.is_none());
    assert!(board.tasks().is_empty());

    assert_eq!(
        notifier.errors(),
        vec!["Failed to fetch tasks".to_string(), "Failed to add task".to_string()]
    );
}

#[tokio::test]
async fn test_no_user_skips_load_and_add() {
    let storage = storage().await;
    seed_task(&storage, &alice().id, "Hidden", TaskStatus::Pending).await;
    let notifier = RecordingNotifier::new();
    let mut board = TaskBoard::new(storage.clone(), None, notifier.clone());

    assert!(!board.load().await);
    assert!(board.add("Orphan").await.is_none());
    assert!(board.tasks().is_empty());
    assert!(notifier.events().is_empty());
    assert_eq!(storage.list_tasks(&alice().id).await.unwrap().len(), 1);
}
