//! Habits view: summary stats, the habit list and the add field.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::constants::NO_USER_MESSAGE;
use crate::habits::HabitStats;
use crate::icons::IconService;
use crate::models::{Habit, StreakTier};
use crate::ui::components::common::{create_input_paragraph, create_instructions_paragraph, panel_block, placeholder};
use crate::ui::components::input_field::{InputEvent, InputField};
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component};

const PROGRESS_BAR_WIDTH: usize = 10;
/// Columns at the start of a row that toggle the habit when clicked
const CHECKBOX_COLUMNS: u16 = 5;

pub struct HabitsComponent {
    habits: Vec<Habit>,
    stats: HabitStats,
    loading: bool,
    has_user: bool,
    selected: usize,
    input: Option<InputField>,
    list_state: ListState,
    list_area: Rect,
    pub icons: IconService,
}

impl HabitsComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            habits: Vec::new(),
            stats: HabitStats::from_habits(&[]),
            loading: true,
            has_user: false,
            selected: 0,
            input: None,
            list_state: ListState::default(),
            list_area: Rect::default(),
            icons,
        }
    }

    pub fn update_data(&mut self, habits: Vec<Habit>, stats: HabitStats, loading: bool, has_user: bool) {
        self.selected = self.selected.min(habits.len().saturating_sub(1));
        self.habits = habits;
        self.stats = stats;
        self.loading = loading;
        self.has_user = has_user;
    }

    fn selected_habit(&self) -> Option<&Habit> {
        self.habits.get(self.selected)
    }

    fn toggle_selected(&self) -> Action {
        match self.selected_habit() {
            Some(habit) => Action::ToggleHabit(habit.id.clone()),
            None => Action::None,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.habits.is_empty() {
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, self.habits.len() as isize - 1) as usize;
    }

    fn streak_color(tier: StreakTier) -> Color {
        match tier {
            StreakTier::High => Color::Red,
            StreakTier::Mid => Color::Yellow,
            StreakTier::Base => Color::Gray,
        }
    }

    fn progress_bar(percentage: f64) -> String {
        let filled = ((percentage / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(PROGRESS_BAR_WIDTH);
        format!("{}{}", "█".repeat(filled), "░".repeat(PROGRESS_BAR_WIDTH - filled))
    }

    fn habit_item(&self, habit: &Habit) -> ListItem<'static> {
        let check_style = if habit.completed_today {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let name_style = if habit.completed_today {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let tier = habit.streak_tier();
        let percentage = habit.completion_percentage();

        ListItem::new(Line::from(vec![
            Span::styled(format!(" {} ", self.icons.habit_check(habit.completed_today)), check_style),
            Span::styled(format!("{:<24}", habit.name), name_style),
            Span::styled(
                format!(
                    " {} {} day{}",
                    self.icons.streak(tier),
                    habit.streak,
                    if habit.streak == 1 { "" } else { "s" }
                ),
                Style::default().fg(Self::streak_color(tier)),
            ),
            Span::styled(format!("  {}", Self::progress_bar(percentage)), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" {:>3.0}% ({}/{} days)", percentage, habit.completed_days, habit.total_days),
                Style::default().fg(Color::Gray),
            ),
        ]))
    }

    fn render_stats(&self, f: &mut Frame, rect: Rect) {
        let cards = [
            ("Total Habits", self.stats.total.to_string()),
            ("Completed Today", self.stats.completed_today.to_string()),
            ("Completion Rate", format!("{}%", self.stats.completion_rate)),
            ("Avg Streak", format!("{:.1}", self.stats.average_streak)),
        ];
        let chunks = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(rect);
        for ((title, value), area) in cards.into_iter().zip(chunks.iter()) {
            let card = Paragraph::new(Line::from(Span::styled(
                value,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(panel_block(format!(" {} ", title), false));
            f.render_widget(card, *area);
        }
    }
}

impl Component for HabitsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(input) = self.input.as_mut() {
            return match input.handle_key(key) {
                InputEvent::Submit => {
                    let name = input.take();
                    self.input = None;
                    self.selected = 0;
                    Action::AddHabit(name)
                }
                InputEvent::Cancel => {
                    self.input = None;
                    Action::None
                }
                _ => Action::None,
            };
        }

        if !self.has_user {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('a') => {
                self.input = Some(InputField::new());
                Action::None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.input.is_some() || !contains(self.list_area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row <= self.list_area.y {
                    return Action::None;
                }
                let index = self.list_state.offset() + (mouse.row - self.list_area.y - 1) as usize;
                if index >= self.habits.len() {
                    return Action::None;
                }
                self.selected = index;
                if mouse.column < self.list_area.x + 1 + CHECKBOX_COLUMNS {
                    self.toggle_selected()
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollDown => {
                self.move_selection(1);
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.move_selection(-1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.has_user {
            f.render_widget(placeholder(NO_USER_MESSAGE), rect);
            return;
        }
        if self.loading {
            f.render_widget(placeholder("Loading habits..."), rect);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(rect);

        self.render_stats(f, chunks[0]);

        match &self.input {
            Some(input) => {
                f.render_widget(
                    create_input_paragraph(input.value(), "New habit - Enter to add, Esc to cancel", true),
                    chunks[1],
                );
                let (_, col) = input.cursor_line_col();
                f.set_cursor_position((chunks[1].x + 1 + col as u16, chunks[1].y + 1));
            }
            None => {
                let instructions = create_instructions_paragraph(&[
                    ("a", Color::Green, " Add habit"),
                    ("j/k", Color::Cyan, " Select"),
                    ("Space", Color::Magenta, " Toggle today"),
                ]);
                f.render_widget(instructions.block(panel_block("", false)), chunks[1]);
            }
        }

        self.list_area = chunks[2];
        let block = panel_block(" Today's Habits ", self.input.is_none());
        if self.habits.is_empty() {
            let inner = block.inner(chunks[2]);
            f.render_widget(block, chunks[2]);
            f.render_widget(placeholder("No habits yet. Press 'a' to add one."), inner);
            return;
        }

        let items: Vec<ListItem> = self.habits.iter().map(|h| self.habit_item(h)).collect();
        self.list_state.select(Some(self.selected));
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, chunks[2], &mut self.list_state);
    }

    fn is_capturing_input(&self) -> bool {
        self.input.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn habit(id: &str) -> Habit {
        Habit {
            id: id.to_string(),
            name: "Read".to_string(),
            streak: 0,
            completed_today: false,
            total_days: 0,
            completed_days: 0,
            color: "primary".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_space_toggles_selected() {
        let mut component = HabitsComponent::new(IconService::default());
        let habits = vec![habit("h1"), habit("h2")];
        let stats = HabitStats::from_habits(&habits);
        component.update_data(habits, stats, false, true);
        component.handle_key_events(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(
            component.handle_key_events(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            Action::ToggleHabit("h2".to_string())
        );
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(HabitsComponent::progress_bar(0.0), "░".repeat(PROGRESS_BAR_WIDTH));
        assert_eq!(HabitsComponent::progress_bar(100.0), "█".repeat(PROGRESS_BAR_WIDTH));
    }
}
