//! Toast overlay in the bottom-right corner.

use chrono::Utc;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::TOAST_TTL_SECS;
use crate::icons::IconService;
use crate::notify::{Severity, ToastQueue};
use crate::ui::components::common::create_dialog_block;
use crate::ui::core::{Action, Component};

const TOAST_WIDTH: u16 = 36;
const TOAST_HEIGHT: u16 = 4;

pub struct ToastComponent {
    queue: ToastQueue,
    pub icons: IconService,
}

impl ToastComponent {
    pub fn new(queue: ToastQueue, icons: IconService) -> Self {
        Self { queue, icons }
    }

    /// Drop expired toasts; returns true when the overlay needs a redraw
    pub fn expire(&self) -> bool {
        self.queue.expire(Utc::now(), TOAST_TTL_SECS)
    }
}

impl Component for ToastComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let toasts = self.queue.active(Utc::now(), TOAST_TTL_SECS);
        let width = TOAST_WIDTH.min(rect.width);
        let x = rect.x + rect.width - width;
        let mut y = rect.y + rect.height;

        // Newest at the bottom, stacking upwards
        for toast in toasts.iter().rev() {
            if y < rect.y + TOAST_HEIGHT {
                break;
            }
            y -= TOAST_HEIGHT;
            let area = Rect::new(x, y, width, TOAST_HEIGHT);

            let color = match toast.severity {
                Severity::Info => Color::Green,
                Severity::Error => Color::Red,
            };
            let title = format!(" {} {} ", self.icons.severity(toast.severity), toast.title);
            let body = Paragraph::new(Line::from(Span::styled(
                toast.description.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )))
            .wrap(Wrap { trim: true })
            .block(create_dialog_block(&title, color));

            f.render_widget(Clear, area);
            f.render_widget(body, area);
        }
    }
}
