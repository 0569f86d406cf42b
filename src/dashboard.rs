//! Dashboard shell: the active-view selector and the three components it hosts.
//!
//! The Overview shows fixed sample numbers. They are not computed from the
//! task, note or habit collections.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::board::TaskBoard;
use crate::habits::HabitTracker;
use crate::identity::User;
use crate::notes::NotesEditor;
use crate::notify::Notifier;
use crate::store::Store;

/// Which view the shell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Overview,
    Tasks,
    Notes,
    Habits,
}

impl ActiveView {
    pub const ALL: [ActiveView; 4] = [ActiveView::Overview, ActiveView::Tasks, ActiveView::Notes, ActiveView::Habits];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Overview => "overview",
            ActiveView::Tasks => "tasks",
            ActiveView::Notes => "notes",
            ActiveView::Habits => "habits",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Overview => "Overview",
            ActiveView::Tasks => "Tasks",
            ActiveView::Notes => "Notes",
            ActiveView::Habits => "Habits",
        }
    }

    /// Header line shown above the view
    pub fn subtitle(&self) -> &'static str {
        match self {
            ActiveView::Overview => "Your productivity at a glance",
            ActiveView::Tasks => "Manage your tasks efficiently",
            ActiveView::Notes => "Capture your thoughts and ideas",
            ActiveView::Habits => "Build better daily habits",
        }
    }

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let index = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown view '{}'", s))
    }
}

/// Shortcut buttons on the Overview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    NewTask,
    NewNote,
    CheckHabits,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [QuickAction::NewTask, QuickAction::NewNote, QuickAction::CheckHabits];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::NewTask => "New Task",
            QuickAction::NewNote => "New Note",
            QuickAction::CheckHabits => "Check Habits",
        }
    }

    pub fn target(&self) -> ActiveView {
        match self {
            QuickAction::NewTask => ActiveView::Tasks,
            QuickAction::NewNote => ActiveView::Notes,
            QuickAction::CheckHabits => ActiveView::Habits,
        }
    }
}

/// A summary card on the Overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub lines: Vec<&'static str>,
}

/// Sample figures shown on the Overview
pub static OVERVIEW_CARDS: Lazy<Vec<SummaryCard>> = Lazy::new(|| {
    vec![
        SummaryCard {
            title: "Quick Tasks",
            lines: vec!["3 tasks pending", "2 in progress", "5 completed today"],
        },
        SummaryCard {
            title: "Habit Progress",
            lines: vec!["7 day streak 🔥", "4/5 habits completed", "80% completion rate"],
        },
        SummaryCard {
            title: "Recent Notes",
            lines: vec![
                "Meeting Notes - 2 hours ago",
                "Project Ideas - Yesterday",
                "Weekly Review - 3 days ago",
            ],
        },
    ]
});

pub struct Dashboard {
    active_view: ActiveView,
    pub board: TaskBoard,
    pub notes: NotesEditor,
    pub habits: HabitTracker,
}

impl Dashboard {
    pub fn new(store: Arc<dyn Store>, user: Option<User>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            active_view: ActiveView::default(),
            board: TaskBoard::new(store.clone(), user.clone(), notifier.clone()),
            notes: NotesEditor::new(store.clone(), user.clone(), notifier.clone()),
            habits: HabitTracker::new(store, user, notifier),
        }
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn navigate(&mut self, view: ActiveView) {
        if self.active_view != view {
            log::info!("Dashboard: {} -> {}", self.active_view, view);
        }
        self.active_view = view;
    }

    pub fn quick_action(&mut self, action: QuickAction) {
        self.navigate(action.target());
    }

    pub fn overview_cards(&self) -> &'static [SummaryCard] {
        &OVERVIEW_CARDS
    }

    pub fn user(&self) -> Option<&User> {
        self.board.user()
    }

    /// Switch every component to a new user; follow with [`Dashboard::load_all`]
    pub fn set_user(&mut self, user: Option<User>) {
        self.board.set_user(user.clone());
        self.notes.set_user(user.clone());
        self.habits.set_user(user);
    }

    /// One-shot load of all three collections. Does nothing without a user.
    pub async fn load_all(&mut self) {
        if self.user().is_none() {
            log::info!("Dashboard: no user, nothing to load");
            return;
        }
        self.board.load().await;
        self.notes.load().await;
        self.habits.load().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle() {
        assert_eq!(ActiveView::Overview.next(), ActiveView::Tasks);
        assert_eq!(ActiveView::Habits.next(), ActiveView::Overview);
        assert_eq!(ActiveView::Overview.previous(), ActiveView::Habits);
    }

    #[test]
    fn test_view_parse() {
        for view in ActiveView::ALL {
            assert_eq!(view.as_str().parse::<ActiveView>(), Ok(view));
        }
        assert!("todos".parse::<ActiveView>().is_err());
    }

    #[test]
    fn test_quick_action_targets() {
        assert_eq!(QuickAction::NewTask.target(), ActiveView::Tasks);
        assert_eq!(QuickAction::NewNote.target(), ActiveView::Notes);
        assert_eq!(QuickAction::CheckHabits.target(), ActiveView::Habits);
    }
}
