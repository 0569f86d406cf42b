//! Overview: the sample summary cards and the quick-action buttons.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

use crate::dashboard::{QuickAction, SummaryCard, OVERVIEW_CARDS};
use crate::icons::IconService;
use crate::ui::components::common::panel_block;
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component};

pub struct OverviewComponent {
    cards: &'static [SummaryCard],
    selected_button: usize,
    button_areas: Vec<Rect>,
    pub icons: IconService,
}

impl OverviewComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            cards: &OVERVIEW_CARDS,
            selected_button: 0,
            button_areas: Vec::new(),
            icons,
        }
    }

    fn card_accent(index: usize) -> Color {
        match index {
            0 => Color::Blue,
            1 => Color::Green,
            _ => Color::Magenta,
        }
    }

    fn render_cards(&self, f: &mut Frame, rect: Rect) {
        let constraints = vec![Constraint::Ratio(1, self.cards.len().max(1) as u32); self.cards.len()];
        let chunks = Layout::horizontal(constraints).split(rect);

        for (index, (card, area)) in self.cards.iter().zip(chunks.iter()).enumerate() {
            let lines: Vec<Line> = card
                .lines
                .iter()
                .map(|line| Line::from(Span::styled(*line, Style::default().fg(Color::Gray))))
                .collect();
            let title = Line::from(Span::styled(
                format!(" {} ", card.title),
                Style::default().fg(Self::card_accent(index)).add_modifier(Modifier::BOLD),
            ));
            f.render_widget(Paragraph::new(lines).block(panel_block(title, false)), *area);
        }
    }

    fn render_buttons(&mut self, f: &mut Frame, rect: Rect) {
        let block = panel_block(" Quick Actions ", false);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
        self.button_areas = chunks.to_vec();

        for (index, (action, area)) in QuickAction::ALL.iter().zip(chunks.iter()).enumerate() {
            let selected = index == self.selected_button;
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let button = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", self.icons.view(action.target())), style),
                Span::styled(action.label(), style),
            ]))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(if selected { Color::Cyan } else { Color::DarkGray })),
            );
            f.render_widget(button, *area);
        }
    }
}

impl Component for OverviewComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => {
                self.selected_button = self.selected_button.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.selected_button = (self.selected_button + 1).min(QuickAction::ALL.len() - 1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match QuickAction::ALL.get(self.selected_button) {
                Some(action) => Action::QuickAction(*action),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let clicked = self
            .button_areas
            .iter()
            .position(|area| contains(*area, mouse.column, mouse.row));
        match clicked.and_then(|index| QuickAction::ALL.get(index).map(|a| (index, *a))) {
            Some((index, action)) => {
                self.selected_button = index;
                Action::QuickAction(action)
            }
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Length(6), Constraint::Length(5), Constraint::Min(0)]).split(rect);
        self.render_cards(f, chunks[0]);
        self.render_buttons(f, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_enter_triggers_selected_quick_action() {
        let mut overview = OverviewComponent::new(IconService::default());
        overview.handle_key_events(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(
            overview.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Action::QuickAction(QuickAction::NewNote)
        );
    }

    #[test]
    fn test_button_focus_is_clamped() {
        let mut overview = OverviewComponent::new(IconService::default());
        for _ in 0..5 {
            overview.handle_key_events(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE));
        }
        assert_eq!(
            overview.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Action::QuickAction(QuickAction::CheckHabits)
        );
    }
}
