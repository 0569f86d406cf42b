//! Modal dialogs: the key-binding help and the in-memory log viewer.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::components::common::centered_rect;
use crate::ui::core::{Action, Component, DialogType};

const PAGE_SIZE: usize = 10;

/// (section, [(keys, description)])
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Tab / Shift+Tab", "Next / previous view"),
            ("1-4", "Jump to Overview, Tasks, Notes, Habits"),
            ("?", "Toggle this help"),
            ("G", "Show logs"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
    (
        "Overview",
        &[("h/l", "Choose a quick action"), ("Enter", "Run the quick action")],
    ),
    (
        "Tasks",
        &[
            ("a", "Add a task"),
            ("h/l, j/k", "Change lane, change task"),
            ("p / i / d", "Mark pending, in progress, done"),
            ("Space", "Grab the task, aim with h/j/k/l, drop with Space/Enter"),
            ("Esc", "Cancel a move"),
            ("Mouse drag", "Drag a task to another lane"),
        ],
    ),
    (
        "Notes",
        &[
            ("j/k", "Select a note"),
            ("n", "New note"),
            ("e / Enter", "Edit the selected note"),
            ("Tab", "Cycle title, content and tag fields"),
            ("Enter (tag field)", "Add the tag"),
            ("Backspace (empty tag field)", "Remove the last tag"),
            ("Ctrl+S", "Save"),
            ("Ctrl+N / click", "New note or switch note, dropping edits"),
            ("Esc", "Discard changes"),
        ],
    ),
    (
        "Habits",
        &[
            ("a", "Add a habit"),
            ("j/k", "Select a habit"),
            ("Space / Enter", "Toggle today's completion"),
        ],
    ),
];

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn help_lines() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (section, bindings) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                *section,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<30}", keys), Style::default().fg(Color::Yellow)),
                    Span::styled(*description, Style::default().fg(Color::White)),
                ]));
            }
            lines.push(Line::default());
        }
        lines
    }

    fn log_lines(&self) -> Vec<Line<'static>> {
        let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
        if logs.is_empty() {
            return vec![Line::from("No logs yet")];
        }
        logs.into_iter().map(Line::from).collect()
    }

    fn render_scrollable(&mut self, f: &mut Frame, rect: Rect, title: &str, lines: Vec<Line<'static>>) {
        let area = centered_rect(80, 80, rect);
        f.render_widget(Clear, area);

        let total_lines = lines.len();
        let visible_height = area.height.saturating_sub(2) as usize;
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.scroll_offset);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title.to_string())
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, area);

        if total_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("▐")
                .style(Style::default().fg(Color::Gray));
            f.render_stateful_widget(
                scrollbar,
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut self.scrollbar_state,
            );
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog) = self.dialog_type else {
            return Action::None;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Char('?') if dialog == DialogType::Help => Action::HideDialog,
            KeyCode::Char('G') if dialog == DialogType::Logs => Action::HideDialog,
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset += 1;
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_offset += PAGE_SIZE;
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SIZE);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog);
                Action::ShowDialog(dialog)
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::HideDialog
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => self.render_scrollable(f, rect, DIALOG_TITLE_HELP, Self::help_lines()),
            Some(DialogType::Logs) => {
                let lines = self.log_lines();
                self.render_scrollable(f, rect, DIALOG_TITLE_LOGS, lines)
            }
            None => {}
        }
    }

    fn is_capturing_input(&self) -> bool {
        self.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_show_and_hide() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::Logs));
        assert!(dialog.is_visible());
        let action = dialog.handle_key_events(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE));
        assert_eq!(action, Action::HideDialog);
        dialog.update(action);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_question_mark_only_closes_help() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::Logs));
        let action = dialog.handle_key_events(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
        assert_eq!(action, Action::None);
    }
}
