//! Sidebar navigation between the four dashboard views.

use crate::dashboard::ActiveView;
use crate::icons::IconService;
use crate::ui::core::component::contains;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Navigation sidebar with one entry per view and the signed-in user below.
///
/// Views are switched with Tab/Shift+Tab, the number keys or a mouse click.
/// The highlighted entry always follows the dashboard's active view.
pub struct SidebarComponent {
    pub active: ActiveView,
    pub user_email: Option<String>,
    pub icons: IconService,
    list_state: ListState,
    list_area: Rect,
}

impl SidebarComponent {
    pub fn new(icons: IconService) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            active: ActiveView::default(),
            user_email: None,
            icons,
            list_state,
            list_area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, active: ActiveView, user_email: Option<String>) {
        self.active = active;
        self.user_email = user_email;
        let index = ActiveView::ALL.iter().position(|v| *v == active).unwrap_or(0);
        self.list_state.select(Some(index));
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !contains(self.list_area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Skip the top border
                if mouse.row <= self.list_area.y {
                    return Action::None;
                }
                let local_index = (mouse.row - self.list_area.y - 1) as usize;
                let clicked_index = self.list_state.offset() + local_index;
                match ActiveView::ALL.get(clicked_index) {
                    Some(view) => Action::Navigate(*view),
                    None => Action::None,
                }
            }
            MouseEventKind::ScrollUp => Action::Navigate(self.active.previous()),
            MouseEventKind::ScrollDown => Action::Navigate(self.active.next()),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::Navigate(view) = &action {
            self.update_data(*view, self.user_email.clone());
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(rect);
        self.list_area = chunks[0];

        let items: Vec<ListItem> = ActiveView::ALL
            .iter()
            .enumerate()
            .map(|(i, view)| {
                let style = if *view == self.active {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", self.icons.view(*view)), style),
                    Span::styled(view.label(), style),
                    Span::styled(format!("  {}", i + 1), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("focusdeck")
                    .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let user_line = match &self.user_email {
            Some(email) => Line::from(vec![
                Span::styled(format!("{} ", self.icons.icons().ui.user), Style::default().fg(Color::Green)),
                Span::styled(email.clone(), Style::default().fg(Color::Gray)),
            ]),
            None => Line::from(Span::styled("Not signed in", Style::default().fg(Color::Yellow))),
        };
        let user = Paragraph::new(user_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(user, chunks[1]);
    }
}
