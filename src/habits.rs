//! Habit tracker: a habit collection with a once-a-day toggle.
//!
//! Aggregates (today count, average streak, completion rate) are computed
//! from the collection on every call and never stored.

use std::sync::Arc;

use crate::constants::{DEFAULT_HABIT_COLOR, SUCCESS_HABIT_ADDED, SUCCESS_HABIT_UPDATED, TOAST_TITLE_ERROR, TOAST_TITLE_SUCCESS};
use crate::error::{EntityKind, PersistenceError};
use crate::identity::User;
use crate::models::Habit;
use crate::notify::{Notifier, Severity};
use crate::store::{HabitPatch, NewHabit, Store};

/// Summary over all habits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitStats {
    pub total: usize,
    pub completed_today: usize,
    /// Rounded percentage of habits done today
    pub completion_rate: u32,
    pub average_streak: f64,
}

impl HabitStats {
    pub fn from_habits(habits: &[Habit]) -> Self {
        let total = habits.len();
        let completed_today = habits.iter().filter(|h| h.completed_today).count();
        let (completion_rate, average_streak) = if total == 0 {
            (0, 0.0)
        } else {
            let streak_sum: f64 = habits.iter().map(|h| f64::from(h.streak)).sum();
            (
                (completed_today as f64 / total as f64 * 100.0).round() as u32,
                streak_sum / total as f64,
            )
        };

        Self {
            total,
            completed_today,
            completion_rate,
            average_streak,
        }
    }
}

pub struct HabitTracker {
    habits: Vec<Habit>,
    loading: bool,
    user: Option<User>,
    store: Arc<dyn Store>,
    notifier: Arc<dyn Notifier>,
}

impl HabitTracker {
    pub fn new(store: Arc<dyn Store>, user: Option<User>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            habits: Vec::new(),
            loading: true,
            user,
            store,
            notifier,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        if self.user != user {
            self.habits.clear();
            self.loading = true;
        }
        self.user = user;
    }

    pub fn stats(&self) -> HabitStats {
        HabitStats::from_habits(&self.habits)
    }

    /// Fetch the owner's habits, newest first. Does nothing without a user.
    pub async fn load(&mut self) -> bool {
        let Some(owner) = self.user.as_ref().map(|u| u.id.clone()) else {
            log::debug!("Habits: no user, skipping load");
            return false;
        };

        match self
            .store
            .list_habits(&owner)
            .await
            .map_err(PersistenceError::fetch(EntityKind::Habit))
        {
            Ok(habits) => {
                log::info!("Habits: loaded {} habits", habits.len());
                self.habits = habits;
                self.loading = false;
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Create a habit with zeroed counters at the head of the list.
    /// Blank names are ignored. Returns the new habit's id.
    pub async fn add(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let Some(owner) = self.user.as_ref().map(|u| u.id.clone()) else {
            log::warn!("Habits: cannot add habit '{}' without a user", name);
            return None;
        };

        let new_habit = NewHabit {
            name: name.to_string(),
            color: DEFAULT_HABIT_COLOR.to_string(),
        };
        match self
            .store
            .insert_habit(&owner, new_habit)
            .await
            .map_err(PersistenceError::add(EntityKind::Habit))
        {
            Ok(habit) => {
                log::info!("Habits: added habit {} '{}'", habit.id, habit.name);
                let id = habit.id.clone();
                self.habits.insert(0, habit);
                self.notifier.notify(TOAST_TITLE_SUCCESS, SUCCESS_HABIT_ADDED, Severity::Info);
                Some(id)
            }
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    /// Flip today's completion and adjust streak and day counters
    pub async fn toggle(&mut self, id: &str) -> bool {
        let Some(position) = self.habits.iter().position(|h| h.id == id) else {
            log::debug!("Habits: habit {} not found", id);
            return false;
        };

        let counters = self.habits[position].counters().toggled();
        let patch = HabitPatch {
            counters: Some(counters),
            ..Default::default()
        };
        match self
            .store
            .update_habit(id, patch)
            .await
            .map_err(PersistenceError::update(EntityKind::Habit))
        {
            Ok(_) => {
                let habit = &mut self.habits[position];
                habit.apply(counters);
                log::info!(
                    "Habits: '{}' done today: {}, streak {}, {}/{} days",
                    habit.name,
                    habit.completed_today,
                    habit.streak,
                    habit.completed_days,
                    habit.total_days
                );
                self.notifier.notify(TOAST_TITLE_SUCCESS, SUCCESS_HABIT_UPDATED, Severity::Info);
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    fn report(&self, error: &PersistenceError) {
        log::error!("Habits: {}: {}", error, error.source);
        self.notifier.notify(TOAST_TITLE_ERROR, &error.to_string(), Severity::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn habit(streak: u32, completed_today: bool) -> Habit {
        Habit {
            id: format!("h{}", streak),
            name: "Meditate".to_string(),
            streak,
            completed_today,
            total_days: 30,
            completed_days: 20,
            color: DEFAULT_HABIT_COLOR.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_stats_of_empty_list() {
        let stats = HabitStats::from_habits(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed_today, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.average_streak, 0.0);
    }

    #[test]
    fn test_stats() {
        let habits = vec![habit(7, true), habit(5, true), habit(3, false), habit(12, true)];
        let stats = HabitStats::from_habits(&habits);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed_today, 3);
        assert_eq!(stats.completion_rate, 75);
        assert!((stats.average_streak - 6.75).abs() < f64::EPSILON);
    }
}
