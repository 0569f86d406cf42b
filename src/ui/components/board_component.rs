//! Kanban view of the task board.
//!
//! Three lanes side by side. Tasks move between lanes with the status keys,
//! with keyboard move mode (Space to grab, h/j/k/l to aim, Space/Enter to drop)
//! or by dragging with the mouse. Both gestures end in a
//! [`RelocationEvent`].

use crate::board::{available_transitions, lane_position, lane_tasks, LanePosition, RelocationEvent};
use crate::icons::IconService;
use crate::models::{Task, TaskStatus};
use crate::ui::components::common::{create_input_paragraph, create_instructions_paragraph, panel_block, placeholder};
use crate::ui::components::input_field::{InputEvent, InputField};
use crate::ui::core::component::contains;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Keyboard move in progress
#[derive(Debug, Clone)]
struct MoveState {
    task_id: String,
    source: LanePosition,
    target: LanePosition,
}

/// Mouse drag in progress
#[derive(Debug, Clone)]
struct DragState {
    task_id: String,
    source: LanePosition,
    hover: Option<TaskStatus>,
}

pub struct BoardComponent {
    tasks: Vec<Task>,
    loading: bool,
    has_user: bool,
    focused_lane: usize,
    selected: [usize; 3],
    lane_states: [ListState; 3],
    lane_areas: [Rect; 3],
    input: Option<InputField>,
    moving: Option<MoveState>,
    drag: Option<DragState>,
    /// Task to re-focus after the next data refresh
    follow: Option<String>,
    pub icons: IconService,
}

impl BoardComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            has_user: false,
            focused_lane: 0,
            selected: [0; 3],
            lane_states: Default::default(),
            lane_areas: [Rect::default(); 3],
            input: None,
            moving: None,
            drag: None,
            follow: None,
            icons,
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, loading: bool, has_user: bool) {
        self.tasks = tasks;
        self.loading = loading;
        self.has_user = has_user;

        if let Some(id) = self.follow.take() {
            if let Some(position) = lane_position(&self.tasks, &id) {
                self.focused_lane = position.lane.lane_index();
                self.selected[self.focused_lane] = position.index;
            }
        }

        for status in TaskStatus::ALL {
            let lane = status.lane_index();
            let len = self.lane_len(status);
            self.selected[lane] = self.selected[lane].min(len.saturating_sub(1));
        }
    }

    fn lane(&self, status: TaskStatus) -> Vec<&Task> {
        lane_tasks(&self.tasks, status)
    }

    fn lane_len(&self, status: TaskStatus) -> usize {
        self.lane(status).len()
    }

    fn focused_status(&self) -> TaskStatus {
        TaskStatus::from_lane_index(self.focused_lane).unwrap_or(TaskStatus::Pending)
    }

    /// Task under the cursor in the focused lane
    pub fn selected_task(&self) -> Option<&Task> {
        self.lane(self.focused_status())
            .get(self.selected[self.focused_lane])
            .copied()
    }

    fn move_lane_focus(&mut self, delta: isize) {
        let next = self.focused_lane as isize + delta;
        if (0..TaskStatus::ALL.len() as isize).contains(&next) {
            self.focused_lane = next as usize;
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.lane_len(self.focused_status());
        if len == 0 {
            return;
        }
        let current = self.selected[self.focused_lane] as isize;
        self.selected[self.focused_lane] = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    fn request_status(&mut self, status: TaskStatus) -> Action {
        let Some(task) = self.selected_task() else {
            return Action::None;
        };
        if !available_transitions(task.status).contains(&status) {
            return Action::None;
        }
        let id = task.id.clone();
        self.follow = Some(id.clone());
        Action::SetTaskStatus { id, status }
    }

    fn grab_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let source = LanePosition::new(task.status, self.selected[self.focused_lane]);
        self.moving = Some(MoveState {
            task_id: task.id.clone(),
            source,
            target: source,
        });
    }

    /// Highest index a moved task can land on in `lane`
    fn max_drop_index(&self, lane: TaskStatus, source: LanePosition) -> usize {
        let len = self.lane_len(lane);
        if lane == source.lane {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    fn handle_move_key(&mut self, key: KeyEvent) -> Action {
        let Some(mut state) = self.moving.take() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('l') | KeyCode::Right => {
                let delta: isize = if matches!(key.code, KeyCode::Char('h') | KeyCode::Left) { -1 } else { 1 };
                let next = state.target.lane.lane_index() as isize + delta;
                if let Some(lane) = usize::try_from(next).ok().and_then(TaskStatus::from_lane_index) {
                    let max = self.max_drop_index(lane, state.source);
                    state.target = LanePosition::new(lane, state.target.index.min(max));
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.max_drop_index(state.target.lane, state.source);
                state.target.index = (state.target.index + 1).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.target.index = state.target.index.saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.follow = Some(state.task_id.clone());
                return Action::RelocateTask(RelocationEvent {
                    task_id: state.task_id,
                    source: state.source,
                    destination: Some(state.target),
                });
            }
            KeyCode::Esc => {
                return Action::RelocateTask(RelocationEvent {
                    task_id: state.task_id,
                    source: state.source,
                    destination: None,
                });
            }
            _ => {}
        }

        self.moving = Some(state);
        Action::None
    }

    /// Lane and drop index under a terminal cell
    fn drop_target(&self, column: u16, row: u16) -> Option<(TaskStatus, usize)> {
        let lane_index = self.lane_areas.iter().position(|area| contains(*area, column, row))?;
        let status = TaskStatus::from_lane_index(lane_index)?;
        let area = self.lane_areas[lane_index];
        let local = row.saturating_sub(area.y + 1) as usize;
        let index = self.lane_states[lane_index].offset() + local;
        Some((status, index))
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        if let Some(input) = &self.input {
            f.render_widget(create_input_paragraph(input.value(), "New task - Enter to add, Esc to cancel", true), rect);
            let (_, col) = input.cursor_line_col();
            f.set_cursor_position((rect.x + 1 + col as u16, rect.y + 1));
            return;
        }

        if let Some(state) = &self.moving {
            let title = self
                .tasks
                .iter()
                .find(|t| t.id == state.task_id)
                .map(|t| t.title.as_str())
                .unwrap_or_default();
            let line = Line::from(vec![
                Span::styled(
                    format!("{} Moving '{}' ", self.icons.icons().ui.grab, title),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("-> {} #{}", state.target.lane.title(), state.target.index + 1),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  (Space/Enter drop, Esc cancel)", Style::default().fg(Color::Gray)),
            ]);
            f.render_widget(Paragraph::new(line).block(panel_block("Move", true)), rect);
            return;
        }

        let instructions = create_instructions_paragraph(&[
            ("a", Color::Green, " Add"),
            ("h/l", Color::Cyan, " Lane"),
            ("j/k", Color::Cyan, " Select"),
            ("p/i/d", Color::Yellow, " Set status"),
            ("Space", Color::Magenta, " Move"),
        ]);
        f.render_widget(instructions.block(panel_block("Board", false)), rect);
    }

    fn render_lane(&mut self, f: &mut Frame, status: TaskStatus, rect: Rect) {
        let lane_index = status.lane_index();
        self.lane_areas[lane_index] = rect;

        let grabbed = self
            .moving
            .as_ref()
            .map(|m| m.task_id.clone())
            .or_else(|| self.drag.as_ref().map(|d| d.task_id.clone()));
        let is_target = self.moving.as_ref().is_some_and(|m| m.target.lane == status)
            || self.drag.as_ref().is_some_and(|d| d.hover == Some(status));
        let focused = lane_index == self.focused_lane && self.input.is_none();

        let items: Vec<ListItem> = self
            .lane(status)
            .into_iter()
            .map(|task| {
                let mut style = Style::default().fg(Color::White);
                if status == TaskStatus::Completed {
                    style = style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
                }
                let mut spans = vec![
                    Span::styled(
                        format!("{} ", self.icons.task_status(task.status)),
                        Style::default().fg(lane_color(status)),
                    ),
                    Span::styled(task.title.clone(), style),
                ];
                if grabbed.as_deref() == Some(task.id.as_str()) {
                    spans.push(Span::styled(
                        format!(" {}", self.icons.icons().ui.grab),
                        Style::default().fg(Color::Yellow),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let count = items.len();
        let title = Line::from(vec![
            Span::styled(
                format!(" {} {} ", self.icons.task_status(status), status.title()),
                Style::default().fg(lane_color(status)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("({}) ", count), Style::default().fg(Color::Gray)),
        ]);
        let mut block = panel_block(title, focused);
        if is_target {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        if count == 0 {
            let inner = block.inner(rect);
            f.render_widget(block, rect);
            f.render_widget(placeholder("No tasks"), inner);
            return;
        }

        let state = &mut self.lane_states[lane_index];
        if focused {
            state.select(Some(self.selected[lane_index]));
        } else {
            state.select(None);
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
        f.render_stateful_widget(list, rect, state);
    }

    fn render_footer(&self, f: &mut Frame, rect: Rect) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let mut spans = vec![Span::styled("Move to: ", Style::default().fg(Color::Gray))];
        for (i, status) in available_transitions(task.status).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{}] {}", status_key(status), status.button_label()),
                Style::default().fg(lane_color(status)),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

fn lane_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Yellow,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Completed => Color::Green,
    }
}

fn status_key(status: TaskStatus) -> char {
    match status {
        TaskStatus::Pending => 'p',
        TaskStatus::InProgress => 'i',
        TaskStatus::Completed => 'd',
    }
}

impl Component for BoardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(input) = self.input.as_mut() {
            return match input.handle_key(key) {
                InputEvent::Submit => {
                    let title = input.take();
                    self.input = None;
                    Action::AddTask(title)
                }
                InputEvent::Cancel => {
                    self.input = None;
                    Action::None
                }
                _ => Action::None,
            };
        }

        if self.moving.is_some() {
            return self.handle_move_key(key);
        }

        if !self.has_user {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('a') => {
                self.input = Some(InputField::new());
                Action::None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.move_lane_focus(-1);
                Action::None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.move_lane_focus(1);
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
            KeyCode::Char('p') => self.request_status(TaskStatus::Pending),
            KeyCode::Char('i') => self.request_status(TaskStatus::InProgress),
            KeyCode::Char('d') => self.request_status(TaskStatus::Completed),
            KeyCode::Char(' ') => {
                self.grab_selected();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.input.is_some() || self.moving.is_some() {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((status, index)) = self.drop_target(mouse.column, mouse.row) else {
                    return Action::None;
                };
                let Some(task) = self.lane(status).get(index).map(|t| t.id.clone()) else {
                    return Action::None;
                };
                self.focused_lane = status.lane_index();
                self.selected[self.focused_lane] = index;
                self.drag = Some(DragState {
                    task_id: task,
                    source: LanePosition::new(status, index),
                    hover: Some(status),
                });
                Action::None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let hover = self.drop_target(mouse.column, mouse.row).map(|(status, _)| status);
                if let Some(drag) = self.drag.as_mut() {
                    drag.hover = hover;
                }
                Action::None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(drag) = self.drag.take() else {
                    return Action::None;
                };
                let destination = self.drop_target(mouse.column, mouse.row).map(|(status, index)| {
                    LanePosition::new(status, index.min(self.max_drop_index(status, drag.source)))
                });
                if destination.is_some() {
                    self.follow = Some(drag.task_id.clone());
                }
                Action::RelocateTask(RelocationEvent {
                    task_id: drag.task_id,
                    source: drag.source,
                    destination,
                })
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
            f.render_widget(placeholder(crate::constants::NO_USER_MESSAGE), rect);
            return;
        }
        if self.loading {
            f.render_widget(placeholder("Loading tasks..."), rect);
            return;
        }

        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).split(rect);
        self.render_header(f, chunks[0]);

        let lanes = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);
        for status in TaskStatus::ALL {
            self.render_lane(f, status, lanes[status.lane_index()]);
        }

        self.render_footer(f, chunks[2]);
    }

    fn is_capturing_input(&self) -> bool {
        self.input.is_some() || self.moving.is_some()
    }
}
