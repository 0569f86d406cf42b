use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{STREAK_HIGH_THRESHOLD, STREAK_MID_THRESHOLD};
use crate::entities::habit;
use crate::error::StoreError;
use crate::utils::datetime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub streak: u32,
    pub completed_today: bool,
    pub total_days: u32,
    pub completed_days: u32,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// The mutable part of a habit, written as a unit by the daily toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitCounters {
    pub streak: u32,
    pub completed_today: bool,
    pub total_days: u32,
    pub completed_days: u32,
}

impl HabitCounters {
    /// Apply the daily toggle.
    ///
    /// Marking done raises streak and completed days by one; unmarking lowers
    /// both, floored at zero. `total_days` never drops below `completed_days`.
    pub fn toggled(self) -> Self {
        let completed_today = !self.completed_today;
        let (streak, completed_days) = if completed_today {
            (self.streak + 1, self.completed_days + 1)
        } else {
            (self.streak.saturating_sub(1), self.completed_days.saturating_sub(1))
        };

        Self {
            streak,
            completed_today,
            total_days: self.total_days.max(completed_days),
            completed_days,
        }
    }
}

impl Habit {
    pub fn counters(&self) -> HabitCounters {
        HabitCounters {
            streak: self.streak,
            completed_today: self.completed_today,
            total_days: self.total_days,
            completed_days: self.completed_days,
        }
    }

    pub fn apply(&mut self, counters: HabitCounters) {
        self.streak = counters.streak;
        self.completed_today = counters.completed_today;
        self.total_days = counters.total_days;
        self.completed_days = counters.completed_days;
    }

    /// `completed_days / total_days` as a percentage, 0 when no days are tracked
    pub fn completion_percentage(&self) -> f64 {
        if self.total_days == 0 {
            0.0
        } else {
            f64::from(self.completed_days) / f64::from(self.total_days) * 100.0
        }
    }

    pub fn streak_tier(&self) -> StreakTier {
        StreakTier::for_streak(self.streak)
    }
}

/// Badge tier for a streak length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTier {
    Base,
    Mid,
    High,
}

impl StreakTier {
    pub fn for_streak(streak: u32) -> Self {
        if streak >= STREAK_HIGH_THRESHOLD {
            StreakTier::High
        } else if streak >= STREAK_MID_THRESHOLD {
            StreakTier::Mid
        } else {
            StreakTier::Base
        }
    }
}

fn counter(id: &str, field: &str, value: i32) -> Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| StoreError::InvalidData(format!("habit {}: negative {}: {}", id, field, value)))
}

impl TryFrom<habit::Model> for Habit {
    type Error = StoreError;

    fn try_from(model: habit::Model) -> Result<Self, Self::Error> {
        let created_at = datetime::parse_timestamp(&model.created_at)
            .map_err(|e| StoreError::InvalidData(format!("habit {}: created_at: {}", model.id, e)))?;

        Ok(Self {
            streak: counter(&model.id, "streak", model.streak)?,
            total_days: counter(&model.id, "total_days", model.total_days)?,
            completed_days: counter(&model.id, "completed_days", model.completed_days)?,
            completed_today: model.completed_today,
            id: model.id,
            name: model.name,
            color: model.color,
            created_at,
        })
    }
}
