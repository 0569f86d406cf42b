pub mod board_component;
pub mod common;
pub mod dialog_component;
pub mod habits_component;
pub mod input_field;
pub mod notes_component;
pub mod overview_component;
pub mod sidebar_component;
pub mod toast_component;

pub use board_component::BoardComponent;
pub use dialog_component::DialogComponent;
pub use habits_component::HabitsComponent;
pub use input_field::{InputEvent, InputField};
pub use notes_component::NotesComponent;
pub use overview_component::OverviewComponent;
pub use sidebar_component::SidebarComponent;
pub use toast_component::ToastComponent;
