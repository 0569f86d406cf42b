use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::task;
use crate::error::StoreError;
use crate::utils::datetime;

/// Task status. Each status is also a lane on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    /// All statuses in lane order (left to right)
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    /// Persisted value and lane id
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Lane heading
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Short label for the per-task transition buttons
    pub fn button_label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "Progress",
            TaskStatus::Completed => "Done",
        }
    }

    /// Position of the lane on the board
    pub fn lane_index(&self) -> usize {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
        }
    }

    pub fn from_lane_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<task::Model> for Task {
    type Error = StoreError;

    fn try_from(model: task::Model) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse()
            .map_err(|e: UnknownStatus| StoreError::InvalidData(format!("task {}: {}", model.id, e)))?;
        let created_at = datetime::parse_timestamp(&model.created_at)
            .map_err(|e| StoreError::InvalidData(format!("task {}: created_at: {}", model.id, e)))?;

        Ok(Self {
            id: model.id,
            title: model.title,
            status,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_matches_display() {
        for status in TaskStatus::ALL {
            assert_eq!(status.to_string().parse::<TaskStatus>(), Ok(status));
        }
        assert_eq!("done".parse::<TaskStatus>(), Err(UnknownStatus("done".to_string())));
    }

    #[test]
    fn test_lane_indices() {
        for (index, status) in TaskStatus::ALL.iter().enumerate() {
            assert_eq!(status.lane_index(), index);
            assert_eq!(TaskStatus::from_lane_index(index), Some(*status));
        }
        assert_eq!(TaskStatus::from_lane_index(3), None);
    }

    #[test]
    fn test_from_model_rejects_bad_status() {
        let model = task::Model {
            id: "t1".to_string(),
            user_id: "u".to_string(),
            title: "Write report".to_string(),
            status: "blocked".to_string(),
            created_at: datetime::now_timestamp(),
        };
        assert!(matches!(Task::try_from(model), Err(StoreError::InvalidData(_))));
    }
}
