//! Icon service for managing different icon themes
//!
//! Every glyph the TUI draws comes from here, so switching the theme in the
//! config switches the whole interface.

use serde::{Deserialize, Serialize};

use crate::dashboard::ActiveView;
use crate::models::{StreakTier, TaskStatus};
use crate::notify::Severity;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Lane and task status icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub pending: &'static str,
    pub in_progress: &'static str,
    pub completed: &'static str,
}

/// Sidebar navigation icons
#[derive(Debug, Clone)]
pub struct NavIcons {
    pub overview: &'static str,
    pub tasks: &'static str,
    pub notes: &'static str,
    pub habits: &'static str,
}

/// Habit tracker icons
#[derive(Debug, Clone)]
pub struct HabitIcons {
    pub done: &'static str,
    pub not_done: &'static str,
    pub streak_high: &'static str,
    pub streak_mid: &'static str,
    pub streak_base: &'static str,
}

/// Misc UI icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub success: &'static str,
    pub error: &'static str,
    pub tag: &'static str,
    pub clock: &'static str,
    pub user: &'static str,
    pub grab: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub status: StatusIcons,
    pub nav: NavIcons,
    pub habit: HabitIcons,
    pub ui: UiIcons,
}

/// Icon service providing the glyphs of the configured theme
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            status: StatusIcons {
                pending: "⏳",
                in_progress: "🚧",
                completed: "✅",
            },
            nav: NavIcons {
                overview: "📊",
                tasks: "📋",
                notes: "📝",
                habits: "🎯",
            },
            habit: HabitIcons {
                done: "✅",
                not_done: "⬜",
                streak_high: "🔥",
                streak_mid: "✨",
                streak_base: "🌱",
            },
            ui: UiIcons {
                success: "✅",
                error: "❌",
                tag: "🏷️",
                clock: "🕒",
                user: "👤",
                grab: "✋",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            status: StatusIcons {
                pending: "○",
                in_progress: "◐",
                completed: "●",
            },
            nav: NavIcons {
                overview: "◆",
                tasks: "☰",
                notes: "✎",
                habits: "◎",
            },
            habit: HabitIcons {
                done: "✓",
                not_done: "□",
                streak_high: "▲",
                streak_mid: "△",
                streak_base: "·",
            },
            ui: UiIcons {
                success: "✓",
                error: "✗",
                tag: "#",
                clock: "◷",
                user: "◉",
                grab: "⇅",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            status: StatusIcons {
                pending: "[ ]",
                in_progress: "[~]",
                completed: "[x]",
            },
            nav: NavIcons {
                overview: "*",
                tasks: "T",
                notes: "N",
                habits: "H",
            },
            habit: HabitIcons {
                done: "[x]",
                not_done: "[ ]",
                streak_high: "!!",
                streak_mid: "!",
                streak_base: "-",
            },
            ui: UiIcons {
                success: "+",
                error: "!",
                tag: "#",
                clock: "@",
                user: "~",
                grab: ">",
            },
        }
    }

    #[must_use]
    pub fn task_status(&self, status: TaskStatus) -> &'static str {
        let icons = self.icons();
        match status {
            TaskStatus::Pending => icons.status.pending,
            TaskStatus::InProgress => icons.status.in_progress,
            TaskStatus::Completed => icons.status.completed,
        }
    }

    #[must_use]
    pub fn view(&self, view: ActiveView) -> &'static str {
        let icons = self.icons();
        match view {
            ActiveView::Overview => icons.nav.overview,
            ActiveView::Tasks => icons.nav.tasks,
            ActiveView::Notes => icons.nav.notes,
            ActiveView::Habits => icons.nav.habits,
        }
    }

    #[must_use]
    pub fn habit_check(&self, completed_today: bool) -> &'static str {
        let icons = self.icons();
        if completed_today {
            icons.habit.done
        } else {
            icons.habit.not_done
        }
    }

    #[must_use]
    pub fn streak(&self, tier: StreakTier) -> &'static str {
        let icons = self.icons();
        match tier {
            StreakTier::High => icons.habit.streak_high,
            StreakTier::Mid => icons.habit.streak_mid,
            StreakTier::Base => icons.habit.streak_base,
        }
    }

    #[must_use]
    pub fn severity(&self, severity: Severity) -> &'static str {
        let icons = self.icons();
        match severity {
            Severity::Info => icons.ui.success,
            Severity::Error => icons.ui.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_icons_are_distinct() {
        for theme in [IconTheme::Emoji, IconTheme::Unicode, IconTheme::Ascii] {
            let service = IconService::new(theme);
            let pending = service.task_status(TaskStatus::Pending);
            let progress = service.task_status(TaskStatus::InProgress);
            let done = service.task_status(TaskStatus::Completed);
            assert_ne!(pending, progress);
            assert_ne!(progress, done);
            assert_ne!(pending, done);
        }
    }

    #[test]
    fn test_ascii_theme_is_ascii() {
        let service = IconService::new(IconTheme::Ascii);
        for status in TaskStatus::ALL {
            assert!(service.task_status(status).is_ascii());
        }
        for view in ActiveView::ALL {
            assert!(service.view(view).is_ascii());
        }
    }
}
