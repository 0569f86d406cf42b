use sea_orm::ActiveValue;
use uuid::Uuid;

use super::LocalStorage;
use crate::entities::habit;
use crate::error::StoreError;
use crate::models::Habit;
use crate::repositories::HabitRepository;
use crate::store::{HabitPatch, NewHabit};
use crate::utils::datetime;

fn column_value(field: &str, value: u32) -> Result<i32, StoreError> {
    i32::try_from(value).map_err(|_| StoreError::InvalidData(format!("{} out of range: {}", field, value)))
}

impl LocalStorage {
    /// Get the owner's habits, newest first
    pub async fn get_habits(&self, owner: &str) -> Result<Vec<Habit>, StoreError> {
        HabitRepository::list_for_owner(&self.conn, owner)
            .await?
            .into_iter()
            .map(Habit::try_from)
            .collect()
    }

    /// Store a new habit with zeroed counters
    pub async fn create_habit(&self, owner: &str, new_habit: NewHabit) -> Result<Habit, StoreError> {
        let model = habit::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(owner.to_string()),
            name: ActiveValue::Set(new_habit.name),
            streak: ActiveValue::Set(0),
            completed_today: ActiveValue::Set(false),
            total_days: ActiveValue::Set(0),
            completed_days: ActiveValue::Set(0),
            color: ActiveValue::Set(new_habit.color),
            created_at: ActiveValue::Set(datetime::now_timestamp()),
        };

        HabitRepository::insert(&self.conn, model).await?.try_into()
    }

    /// Apply a partial update to a habit
    pub async fn patch_habit(&self, id: &str, patch: HabitPatch) -> Result<Habit, StoreError> {
        let existing = HabitRepository::get_by_id(&self.conn, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("habit {}", id)))?;

        let mut model: habit::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(counters) = patch.counters {
            // completed_days never exceeds total_days in storage
            let total_days = counters.total_days.max(counters.completed_days);
            model.streak = ActiveValue::Set(column_value("streak", counters.streak)?);
            model.completed_today = ActiveValue::Set(counters.completed_today);
            model.total_days = ActiveValue::Set(column_value("total_days", total_days)?);
            model.completed_days = ActiveValue::Set(column_value("completed_days", counters.completed_days)?);
        }

        HabitRepository::update(&self.conn, model).await?.try_into()
    }
}
