use focusdeck::models::HabitCounters;
use focusdeck::store::{HabitPatch, NewHabit, Store};

use super::common::{seed_habit, storage};

#[tokio::test]
async fn test_new_habit_counters_start_at_zero() {
    let storage = storage().await;
    let habit = storage
        .insert_habit(
            "alice",
            NewHabit {
                name: "Read".to_string(),
                color: "primary".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(habit.name, "Read");
    assert_eq!(habit.streak, 0);
    assert!(!habit.completed_today);
    assert_eq!(habit.total_days, 0);
    assert_eq!(habit.completed_days, 0);
    assert_eq!(habit.color, "primary");
}

#[tokio::test]
async fn test_counters_patch_is_stored() {
    let storage = storage().await;
    let counters = HabitCounters {
        streak: 3,
        completed_today: false,
        total_days: 10,
        completed_days: 5,
    };
    let habit = seed_habit(&storage, "alice", "Exercise", counters).await;
    assert_eq!(habit.counters(), counters);

    let stored = storage.list_habits("alice").await.unwrap();
    assert_eq!(stored[0].counters(), counters);
}

#[tokio::test]
async fn test_completed_days_never_exceed_total_days() {
    let storage = storage().await;
    let habit = seed_habit(
        &storage,
        "alice",
        "Meditate",
        HabitCounters {
            streak: 1,
            completed_today: true,
            total_days: 0,
            completed_days: 1,
        },
    )
    .await;
    assert_eq!(habit.total_days, 1);
    assert_eq!(habit.completed_days, 1);
}

#[tokio::test]
async fn test_rename_keeps_counters() {
    let storage = storage().await;
    let counters = HabitCounters {
        streak: 2,
        completed_today: true,
        total_days: 4,
        completed_days: 2,
    };
    let habit = seed_habit(&storage, "alice", "Walk", counters).await;

    let renamed = storage
        .update_habit(
            &habit.id,
            HabitPatch {
                name: Some("Walk outside".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Walk outside");
    assert_eq!(renamed.counters(), counters);
}
