use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{NOTE_EMPTY_PREVIEW, NOTE_PREVIEW_LINES};
use crate::entities::note;
use crate::error::StoreError;
use crate::utils::datetime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Insertion-ordered, no duplicates
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// First lines of the body for the list view
    pub fn preview(&self) -> String {
        if self.content.trim().is_empty() {
            return NOTE_EMPTY_PREVIEW.to_string();
        }
        self.content
            .lines()
            .take(NOTE_PREVIEW_LINES)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Tags to show as badges plus the count of hidden ones
    pub fn visible_tags(&self, max: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(max);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

/// Encode tags for the `tags` column
pub fn encode_tags(tags: &[String]) -> Result<String, StoreError> {
    serde_json::to_string(tags).map_err(|e| StoreError::InvalidData(format!("tags: {}", e)))
}

impl TryFrom<note::Model> for Note {
    type Error = StoreError;

    fn try_from(model: note::Model) -> Result<Self, Self::Error> {
        let tags: Vec<String> = serde_json::from_str(&model.tags)
            .map_err(|e| StoreError::InvalidData(format!("note {}: tags: {}", model.id, e)))?;
        let created_at = datetime::parse_timestamp(&model.created_at)
            .map_err(|e| StoreError::InvalidData(format!("note {}: created_at: {}", model.id, e)))?;
        let updated_at = datetime::parse_timestamp(&model.updated_at)
            .map_err(|e| StoreError::InvalidData(format!("note {}: updated_at: {}", model.id, e)))?;

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            tags,
            created_at,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(content: &str, tags: &[&str]) -> Note {
        Note {
            id: "n1".to_string(),
            title: "Meeting Notes".to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_preview_keeps_first_lines() {
        let n = note("Discussed the Q4 roadmap:\n- UX improvements\n- Collaboration", &[]);
        assert_eq!(n.preview(), "Discussed the Q4 roadmap:\n- UX improvements");
    }

    #[test]
    fn test_preview_of_empty_note() {
        assert_eq!(note("   ", &[]).preview(), NOTE_EMPTY_PREVIEW);
    }

    #[test]
    fn test_visible_tags_overflow() {
        let n = note("", &["review", "goals", "weekly"]);
        let (shown, hidden) = n.visible_tags(2);
        assert_eq!(shown, ["review".to_string(), "goals".to_string()]);
        assert_eq!(hidden, 1);

        let (shown, hidden) = n.visible_tags(5);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_from_model_parses_tags() {
        let now = datetime::now_timestamp();
        let model = note::Model {
            id: "n1".to_string(),
            user_id: "u".to_string(),
            title: "Ideas".to_string(),
            content: String::new(),
            tags: r#"["ideas","projects"]"#.to_string(),
            created_at: now.clone(),
            updated_at: now,
        };
        let n = Note::try_from(model).unwrap();
        assert_eq!(n.tags, vec!["ideas".to_string(), "projects".to_string()]);
    }
}
