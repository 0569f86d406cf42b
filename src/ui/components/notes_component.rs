//! Notes view: the note list on the left, the viewer or editor on the right.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::constants::{NOTE_EMPTY_BODY, NO_USER_MESSAGE};
use crate::icons::IconService;
use crate::models::Note;
use crate::notes::EditBuffer;
use crate::ui::components::common::{create_input_paragraph, create_instructions_paragraph, panel_block, placeholder};
use crate::ui::components::input_field::{InputEvent, InputField};
use crate::ui::core::component::contains;
use crate::ui::core::{Action, BufferEdit, Component};
use crate::utils::datetime;

/// Editor field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorField {
    Title,
    Content,
    Tag,
}

impl EditorField {
    fn next(self) -> Self {
        match self {
            EditorField::Title => EditorField::Content,
            EditorField::Content => EditorField::Tag,
            EditorField::Tag => EditorField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            EditorField::Title => EditorField::Tag,
            EditorField::Content => EditorField::Title,
            EditorField::Tag => EditorField::Content,
        }
    }
}

pub struct NotesComponent {
    notes: Vec<Note>,
    selected_id: Option<String>,
    editing: bool,
    buffer: EditBuffer,
    loading: bool,
    has_user: bool,
    focus: EditorField,
    title_field: InputField,
    content_field: InputField,
    tag_field: InputField,
    list_state: ListState,
    list_area: Rect,
    /// Rows taken by each list item at the last render
    item_heights: Vec<usize>,
    pub icons: IconService,
    time_format: String,
    max_visible_tags: usize,
}

impl NotesComponent {
    pub fn new(icons: IconService, time_format: String, max_visible_tags: usize) -> Self {
        Self {
            notes: Vec::new(),
            selected_id: None,
            editing: false,
            buffer: EditBuffer::default(),
            loading: true,
            has_user: false,
            focus: EditorField::Title,
            title_field: InputField::new(),
            content_field: InputField::multiline(),
            tag_field: InputField::new(),
            list_state: ListState::default(),
            list_area: Rect::default(),
            item_heights: Vec::new(),
            icons,
            time_format,
            max_visible_tags,
        }
    }

    pub fn update_data(
        &mut self,
        notes: Vec<Note>,
        selected_id: Option<String>,
        editing: bool,
        buffer: EditBuffer,
        loading: bool,
        has_user: bool,
    ) {
        if editing && (!self.editing || selected_id != self.selected_id) {
            self.focus = EditorField::Title;
        }

        // Reseed only what changed so typing keeps its cursor
        if self.title_field.value() != buffer.title {
            self.title_field.set_value(&buffer.title);
        }
        if self.content_field.value() != buffer.content {
            self.content_field.set_value(&buffer.content);
        }
        if self.tag_field.value() != buffer.new_tag {
            self.tag_field.set_value(&buffer.new_tag);
        }

        self.notes = notes;
        self.selected_id = selected_id;
        self.editing = editing;
        self.buffer = buffer;
        self.loading = loading;
        self.has_user = has_user;
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected_id.as_deref()?;
        self.notes.iter().position(|n| n.id == id)
    }

    fn select_relative(&self, delta: isize) -> Action {
        if self.notes.is_empty() {
            return Action::None;
        }
        let next = match self.selected_index() {
            Some(index) => (index as isize + delta).clamp(0, self.notes.len() as isize - 1) as usize,
            None => 0,
        };
        match self.notes.get(next) {
            Some(note) if Some(note.id.as_str()) != self.selected_id.as_deref() => Action::SelectNote(note.id.clone()),
            _ => Action::None,
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => return Action::SaveNote,
                KeyCode::Char('n') => return Action::CreateNote,
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => return Action::CancelEditingNote,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            EditorField::Title => match self.title_field.handle_key(key) {
                InputEvent::Changed => Action::EditNote(BufferEdit::SetTitle(self.title_field.value().to_string())),
                InputEvent::Submit => {
                    self.focus = EditorField::Content;
                    Action::None
                }
                _ => Action::None,
            },
            EditorField::Content => match self.content_field.handle_key(key) {
                InputEvent::Changed => {
                    Action::EditNote(BufferEdit::SetContent(self.content_field.value().to_string()))
                }
                _ => Action::None,
            },
            EditorField::Tag => {
                if key.code == KeyCode::Backspace && self.tag_field.is_empty() {
                    return match self.buffer.tags.last() {
                        Some(tag) => Action::EditNote(BufferEdit::RemoveTag(tag.clone())),
                        None => Action::None,
                    };
                }
                match self.tag_field.handle_key(key) {
                    InputEvent::Changed => Action::EditNote(BufferEdit::SetNewTag(self.tag_field.value().to_string())),
                    InputEvent::Submit => Action::EditNote(BufferEdit::CommitTag),
                    _ => Action::None,
                }
            }
        }
    }

    fn note_item(&self, note: &Note, now: chrono::DateTime<Utc>) -> ListItem<'static> {
        let mut lines = vec![Line::from(Span::styled(
            note.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))];

        for preview_line in note.preview().lines() {
            lines.push(Line::from(Span::styled(
                format!("  {}", preview_line),
                Style::default().fg(Color::Gray),
            )));
        }

        let (visible, overflow) = note.visible_tags(self.max_visible_tags);
        let mut meta = vec![Span::styled(
            format!(
                "  {} {}",
                self.icons.icons().ui.clock,
                datetime::format_relative(note.updated_at, now, &self.time_format)
            ),
            Style::default().fg(Color::DarkGray),
        )];
        for tag in visible {
            meta.push(Span::styled(format!(" #{}", tag), Style::default().fg(Color::Magenta)));
        }
        if overflow > 0 {
            meta.push(Span::styled(format!(" +{}", overflow), Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(meta));

        ListItem::new(lines)
    }

    fn render_list(&mut self, f: &mut Frame, rect: Rect) {
        self.list_area = rect;
        let block = panel_block(format!(" Notes ({}) ", self.notes.len()), !self.editing);

        if self.notes.is_empty() {
            self.item_heights.clear();
            let inner = block.inner(rect);
            f.render_widget(block, rect);
            f.render_widget(placeholder("No notes yet. Press 'n' to create one."), inner);
            return;
        }

        let now = Utc::now();
        let items: Vec<ListItem> = self.notes.iter().map(|note| self.note_item(note, now)).collect();
        self.item_heights = items.iter().map(ListItem::height).collect();
        self.list_state.select(self.selected_index());

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn render_viewer(&self, f: &mut Frame, rect: Rect, note: &Note) {
        let block = panel_block(format!(" {} ", note.title), false);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)]).split(inner);

        let mut meta = vec![Span::styled(
            format!(
                "Updated {}",
                datetime::format_relative(note.updated_at, Utc::now(), &self.time_format)
            ),
            Style::default().fg(Color::DarkGray),
        )];
        for tag in &note.tags {
            meta.push(Span::styled(
                format!(" {}{}", self.icons.icons().ui.tag, tag),
                Style::default().fg(Color::Magenta),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(meta)), chunks[0]);

        let body = if note.content.is_empty() {
            Paragraph::new(NOTE_EMPTY_BODY).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(note.content.clone()).wrap(Wrap { trim: false })
        };
        f.render_widget(body, chunks[1]);

        f.render_widget(
            create_instructions_paragraph(&[("e", Color::Green, " Edit"), ("n", Color::Cyan, " New")]),
            chunks[2],
        );
    }

    fn render_editor(&self, f: &mut Frame, rect: Rect) {
        let block = panel_block(" Editing ", true);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

        f.render_widget(
            create_input_paragraph(self.title_field.value(), "Title", self.focus == EditorField::Title),
            chunks[0],
        );

        let tag_chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(chunks[1]);
        let tags: Vec<Span> = self
            .buffer
            .tags
            .iter()
            .map(|t| Span::styled(format!("#{} ", t), Style::default().fg(Color::Magenta)))
            .collect();
        f.render_widget(Paragraph::new(Line::from(tags)).block(panel_block(" Tags ", false)), tag_chunks[0]);
        f.render_widget(
            create_input_paragraph(self.tag_field.value(), "Add tag", self.focus == EditorField::Tag),
            tag_chunks[1],
        );

        f.render_widget(
            create_input_paragraph(self.content_field.value(), "Content", self.focus == EditorField::Content)
                .wrap(Wrap { trim: false }),
            chunks[2],
        );

        f.render_widget(
            create_instructions_paragraph(&[
                ("Tab", Color::Cyan, " Next field"),
                ("Enter", Color::Magenta, " Add tag"),
                ("Ctrl+S", Color::Green, " Save"),
                ("Ctrl+N", Color::Cyan, " New"),
                ("Esc", Color::Red, " Cancel"),
            ]),
            chunks[3],
        );

        let (area, field) = match self.focus {
            EditorField::Title => (chunks[0], &self.title_field),
            EditorField::Tag => (tag_chunks[1], &self.tag_field),
            EditorField::Content => (chunks[2], &self.content_field),
        };
        let (line, col) = field.cursor_line_col();
        f.set_cursor_position((area.x + 1 + col as u16, area.y + 1 + line as u16));
    }
}

impl Component for NotesComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.has_user {
            return Action::None;
        }
        if self.editing {
            return self.handle_editor_key(key);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_relative(1),
            KeyCode::Char('k') | KeyCode::Up => self.select_relative(-1),
            KeyCode::Char('n') => Action::CreateNote,
            KeyCode::Char('e') | KeyCode::Enter if self.selected_id.is_some() => Action::StartEditingNote,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.has_user || !contains(self.list_area, mouse.column, mouse.row) {
            return Action::None;
        }

        // Clicking another note while editing drops the unsaved buffer
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row <= self.list_area.y {
                    return Action::None;
                }
                let mut row = (mouse.row - self.list_area.y - 1) as usize;
                for (index, height) in self.item_heights.iter().enumerate().skip(self.list_state.offset()) {
                    if row < *height {
                        return match self.notes.get(index) {
                            Some(note) => Action::SelectNote(note.id.clone()),
                            None => Action::None,
                        };
                    }
                    row -= height;
                }
                Action::None
            }
            MouseEventKind::ScrollDown if !self.editing => self.select_relative(1),
            MouseEventKind::ScrollUp if !self.editing => self.select_relative(-1),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.has_user {
            f.render_widget(placeholder(NO_USER_MESSAGE), rect);
            return;
        }
        if self.loading {
            f.render_widget(placeholder("Loading notes..."), rect);
            return;
        }

        let chunks = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).split(rect);
        self.render_list(f, chunks[0]);

        let selected = self.selected_index().and_then(|i| self.notes.get(i));
        match selected {
            Some(_) if self.editing => self.render_editor(f, chunks[1]),
            Some(note) => self.render_viewer(f, chunks[1], note),
            None => {
                let block = panel_block(" Note ", false);
                let inner = block.inner(chunks[1]);
                f.render_widget(block, chunks[1]);
                f.render_widget(placeholder("Select a note or press 'n' to create one"), inner);
            }
        }
    }

    fn is_capturing_input(&self) -> bool {
        self.editing
    }
}
