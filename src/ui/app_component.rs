use crate::config::Config;
use crate::dashboard::{ActiveView, Dashboard};
use crate::logger::Logger;
use crate::notify::ToastQueue;
use crate::ui::components::{
    BoardComponent, DialogComponent, HabitsComponent, NotesComponent, OverviewComponent, SidebarComponent,
    ToastComponent,
};
use crate::ui::core::component::contains;
use crate::ui::core::{
    actions::{Action, BufferEdit, DialogType},
    event_handler::EventType,
    Component,
};
use crate::icons::IconService;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    overview: OverviewComponent,
    board: BoardComponent,
    notes: NotesComponent,
    habits: HabitsComponent,
    toasts: ToastComponent,
    dialog: DialogComponent,

    // Application state
    dashboard: Dashboard,
    logger: Logger,
    icons: IconService,
    sidebar_width: u16,
    sidebar_area: Rect,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(mut dashboard: Dashboard, toast_queue: ToastQueue, logger: Logger, config: &Config) -> Self {
        let icons = IconService::new(config.display.icon_theme);
        dashboard.navigate(config.ui.default_view());

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            sidebar: SidebarComponent::new(icons.clone()),
            overview: OverviewComponent::new(icons.clone()),
            board: BoardComponent::new(icons.clone()),
            notes: NotesComponent::new(
                icons.clone(),
                config.display.time_format.clone(),
                config.display.max_visible_tags,
            ),
            habits: HabitsComponent::new(icons.clone()),
            toasts: ToastComponent::new(toast_queue, icons.clone()),
            dialog,
            dashboard,
            logger,
            icons,
            sidebar_width: config.ui.sidebar_width,
            sidebar_area: Rect::default(),
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Load every collection for the current user
    pub async fn load(&mut self) {
        match self.dashboard.user() {
            Some(user) => self.logger.log(format!("AppComponent: loading data for {}", user.email)),
            None => self.logger.log("AppComponent: no user, skipping initial load".to_string()),
        }
        self.dashboard.load_all().await;
        self.sync_component_data();
    }

    /// Copy dashboard state into the view components
    fn sync_component_data(&mut self) {
        let has_user = self.dashboard.user().is_some();

        self.sidebar.update_data(
            self.dashboard.active_view(),
            self.dashboard.user().map(|u| u.email.clone()),
        );

        let board = &self.dashboard.board;
        self.board
            .update_data(board.tasks().to_vec(), board.is_loading(), has_user);

        let notes = &self.dashboard.notes;
        self.notes.update_data(
            notes.notes().to_vec(),
            notes.selected_id().map(String::from),
            notes.is_editing(),
            notes.buffer().clone(),
            notes.is_loading(),
            has_user,
        );

        let habits = &self.dashboard.habits;
        self.habits
            .update_data(habits.habits().to_vec(), habits.stats(), habits.is_loading(), has_user);
    }

    fn active_component(&mut self) -> &mut dyn Component {
        match self.dashboard.active_view() {
            ActiveView::Overview => &mut self.overview,
            ActiveView::Tasks => &mut self.board,
            ActiveView::Notes => &mut self.notes,
            ActiveView::Habits => &mut self.habits,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Tab => Action::Navigate(self.dashboard.active_view().next()),
            KeyCode::BackTab => Action::Navigate(self.dashboard.active_view().previous()),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                ActiveView::ALL.get(index).map_or(Action::None, |view| Action::Navigate(*view))
            }
            _ => Action::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_global_key(key);
        }

        let component = self.active_component();
        if component.is_capturing_input() {
            return component.handle_key_events(key);
        }

        let action = component.handle_key_events(key);
        if !matches!(action, Action::None) {
            action
        } else {
            self.handle_global_key(key)
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_visible() {
            return Action::None;
        }
        if contains(self.sidebar_area, mouse.column, mouse.row) {
            let action = self.sidebar.handle_mouse_events(mouse);
            if !matches!(action, Action::None) {
                return action;
            }
        }
        // The active view also sees events outside its area so a drag can end anywhere
        self.active_component().handle_mouse_events(mouse)
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Navigate(view) => {
                self.logger.log(format!("Navigation: switched to {}", view));
                self.dashboard.navigate(view);
            }
            Action::QuickAction(quick) => {
                self.logger.log(format!("Overview: quick action '{}'", quick.label()));
                self.dashboard.quick_action(quick);
            }
            Action::AddTask(title) => {
                self.logger.log(format!("Task: adding '{}'", title));
                if self.dashboard.board.add(&title).await.is_none() {
                    self.logger.log("Task: nothing added".to_string());
                }
            }
            Action::SetTaskStatus { id, status } => {
                self.logger.log(format!("Task: setting {} to {}", id, status));
                self.dashboard.board.set_status(&id, status).await;
            }
            Action::RelocateTask(event) => {
                match event.destination {
                    Some(destination) => self.logger.log(format!(
                        "Task: relocating {} from {}#{} to {}#{}",
                        event.task_id, event.source.lane, event.source.index, destination.lane, destination.index
                    )),
                    None => self.logger.log(format!("Task: move of {} cancelled", event.task_id)),
                }
                self.dashboard.board.relocate(&event).await;
            }
            Action::CreateNote => {
                self.logger.log("Note: creating".to_string());
                self.dashboard.notes.create().await;
            }
            Action::SelectNote(id) => {
                self.dashboard.notes.select(&id);
            }
            Action::StartEditingNote => {
                self.dashboard.notes.start_editing();
            }
            Action::CancelEditingNote => {
                self.logger.log("Note: edits discarded".to_string());
                self.dashboard.notes.cancel_editing();
            }
            Action::SaveNote => {
                self.logger.log("Note: saving".to_string());
                self.dashboard.notes.save().await;
            }
            Action::EditNote(edit) => {
                let buffer = self.dashboard.notes.buffer_mut();
                match edit {
                    BufferEdit::SetTitle(title) => buffer.title = title,
                    BufferEdit::SetContent(content) => buffer.content = content,
                    BufferEdit::SetNewTag(tag) => buffer.new_tag = tag,
                    BufferEdit::CommitTag => {
                        buffer.commit_new_tag();
                    }
                    BufferEdit::RemoveTag(tag) => {
                        buffer.remove_tag(&tag);
                    }
                }
            }
            Action::AddHabit(name) => {
                self.logger.log(format!("Habit: adding '{}'", name));
                self.dashboard.habits.add(&name).await;
            }
            Action::ToggleHabit(id) => {
                self.logger.log(format!("Habit: toggling {}", id));
                self.dashboard.habits.toggle(&id).await;
            }
            Action::ShowDialog(dialog) => {
                self.logger.log(format!("Dialog: showing {:?}", dialog));
            }
            Action::HideDialog => {
                self.logger.log("Dialog: hiding".to_string());
            }
            Action::None => {}
        }
        Action::None
    }

    /// Process an event through the component hierarchy.
    /// Returns true when the screen needs a redraw.
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<bool> {
        let action = match event_type {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) => return Ok(true),
            EventType::Tick => return Ok(self.toasts.expire()),
            EventType::Other => return Ok(false),
        };

        // Process action through component hierarchy
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);

        self.handle_app_action(action).await;

        // Update component data after any changes
        self.sync_component_data();
        Ok(true)
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let view = self.dashboard.active_view();
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", self.icons.view(view)), Style::default().fg(Color::Cyan)),
                Span::styled(
                    view.label(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(view.subtitle(), Style::default().fg(Color::DarkGray))),
        ]);
        f.render_widget(header, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let sidebar_width = self.sidebar_width.min(rect.width / 2);
        let main_chunks = Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).split(rect);
        self.sidebar_area = main_chunks[0];
        self.sidebar.render(f, main_chunks[0]);

        let view_chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(main_chunks[1]);
        self.render_header(f, view_chunks[0]);
        self.active_component().render(f, view_chunks[1]);

        self.toasts.render(f, rect);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
