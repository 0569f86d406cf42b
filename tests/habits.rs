// Habit tracker: toggling, counters and aggregate stats

mod common;

use std::sync::Arc;

use common::{alice, seed_habit, storage, FailingStore, ReadOnlyStore, RecordingNotifier};
use focusdeck::habits::HabitTracker;
use focusdeck::models::HabitCounters;
use focusdeck::store::Store;

fn counters(streak: u32, completed_today: bool, completed_days: u32, total_days: u32) -> HabitCounters {
    HabitCounters {
        streak,
        completed_today,
        total_days,
        completed_days,
    }
}

#[tokio::test]
async fn test_toggle_round_trip_restores_counters() {
    let storage = storage().await;
    let habit = seed_habit(&storage, &alice().id, "Exercise", counters(3, false, 5, 10)).await;
    let notifier = RecordingNotifier::new();
    let mut tracker = HabitTracker::new(storage.clone(), Some(alice()), notifier.clone());
    tracker.load().await;

    assert!(tracker.toggle(&habit.id).await);
    assert_eq!(tracker.get(&habit.id).unwrap().counters(), counters(4, true, 6, 10));
    let stored = storage.list_habits(&alice().id).await.unwrap();
    assert_eq!(stored[0].counters(), counters(4, true, 6, 10));

    assert!(tracker.toggle(&habit.id).await);
    assert_eq!(tracker.get(&habit.id).unwrap().counters(), counters(3, false, 5, 10));
    assert_eq!(
        notifier.successes(),
        vec!["Habit updated".to_string(), "Habit updated".to_string()]
    );
}

#[tokio::test]
async fn test_toggle_off_floors_at_zero() {
    let storage = storage().await;
    let habit = seed_habit(&storage, &alice().id, "Journal", counters(0, true, 0, 0)).await;
    let mut tracker = HabitTracker::new(storage, Some(alice()), RecordingNotifier::new());
    tracker.load().await;

    assert!(tracker.toggle(&habit.id).await);
    let toggled = tracker.get(&habit.id).unwrap();
    assert!(!toggled.completed_today);
    assert_eq!(toggled.streak, 0);
    assert_eq!(toggled.completed_days, 0);
}

#[tokio::test]
async fn test_completion_percentage() {
    let storage = storage().await;
    let half = seed_habit(&storage, &alice().id, "Read", counters(2, false, 5, 10)).await;
    let fresh = seed_habit(&storage, &alice().id, "Stretch", counters(0, false, 0, 0)).await;
    let mut tracker = HabitTracker::new(storage, Some(alice()), RecordingNotifier::new());
    tracker.load().await;

    assert_eq!(tracker.get(&half.id).unwrap().completion_percentage(), 50.0);
    assert_eq!(tracker.get(&fresh.id).unwrap().completion_percentage(), 0.0);
}

#[tokio::test]
async fn test_stats_follow_the_collection() {
    let storage = storage().await;
    let owner = alice().id;
    seed_habit(&storage, &owner, "Meditate", counters(7, true, 20, 30)).await;
    seed_habit(&storage, &owner, "Read", counters(5, true, 12, 14)).await;
    let drink = seed_habit(&storage, &owner, "Drink water", counters(3, false, 8, 10)).await;
    seed_habit(&storage, &owner, "Exercise", counters(12, true, 25, 30)).await;

    let mut tracker = HabitTracker::new(storage, Some(alice()), RecordingNotifier::new());
    tracker.load().await;

    let stats = tracker.stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed_today, 3);
    assert_eq!(stats.completion_rate, 75);
    assert!((stats.average_streak - 6.75).abs() < 1e-9);

    tracker.toggle(&drink.id).await;
    let stats = tracker.stats();
    assert_eq!(stats.completed_today, 4);
    assert_eq!(stats.completion_rate, 100);
    assert!((stats.average_streak - 7.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_add_habit_at_head_with_zero_counters() {
    let storage = storage().await;
    seed_habit(&storage, &alice().id, "Older", counters(1, true, 1, 1)).await;
    let notifier = RecordingNotifier::new();
    let mut tracker = HabitTracker::new(storage, Some(alice()), notifier.clone());
    tracker.load().await;

    let id = tracker.add(" Walk ").await.expect("habit added");
    let habit = &tracker.habits()[0];
    assert_eq!(habit.id, id);
    assert_eq!(habit.name, "Walk");
    assert_eq!(habit.counters(), counters(0, false, 0, 0));
    assert_eq!(habit.color, "primary");

    assert!(tracker.add("   ").await.is_none());
    assert_eq!(tracker.habits().len(), 2);
    assert_eq!(notifier.successes(), vec!["Habit added".to_string()]);
}

#[tokio::test]
async fn test_failed_toggle_leaves_habit_unchanged() {
    let storage = storage().await;
    let habit = seed_habit(&storage, &alice().id, "Exercise", counters(3, false, 5, 10)).await;
    let notifier = RecordingNotifier::new();
    let store = Arc::new(ReadOnlyStore { inner: storage });
    let mut tracker = HabitTracker::new(store, Some(alice()), notifier.clone());
    tracker.load().await;

    assert!(!tracker.toggle(&habit.id).await);
    assert_eq!(tracker.get(&habit.id).unwrap().counters(), counters(3, false, 5, 10));
    assert_eq!(notifier.errors(), vec!["Failed to update habit".to_string()]);
}

#[tokio::test]
async fn test_failed_load_reports_error() {
    let notifier = RecordingNotifier::new();
    let mut tracker = HabitTracker::new(Arc::new(FailingStore), Some(alice()), notifier.clone());

    assert!(!tracker.load().await);
    assert!(tracker.is_loading());
    assert!(!tracker.toggle("missing").await);
    assert_eq!(notifier.errors(), vec!["Failed to fetch habits".to_string()]);
}
