//! Core UI building blocks: actions, the component trait and event polling.
//!
//! Components turn input into [`Action`]s. The app component routes each
//! action through the components' `update` and then applies the ones that
//! touch the dashboard in its async handler.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, BufferEdit, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
