use crate::board::RelocationEvent;
use crate::dashboard::{ActiveView, QuickAction};
use crate::models::TaskStatus;

/// A change to the notes edit buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferEdit {
    SetTitle(String),
    SetContent(String),
    SetNewTag(String),
    /// Move the tag field's text into the tag list
    CommitTag,
    RemoveTag(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(ActiveView),
    QuickAction(QuickAction),

    // Task board
    AddTask(String),
    SetTaskStatus { id: String, status: TaskStatus },
    RelocateTask(RelocationEvent),

    // Notes
    CreateNote,
    SelectNote(String),
    StartEditingNote,
    CancelEditingNote,
    SaveNote,
    EditNote(BufferEdit),

    // Habits
    AddHabit(String),
    ToggleHabit(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
