//! Terminal user interface.
//!
//! A sidebar, one component per dashboard view, a toast overlay and modal
//! dialogs, drawn with ratatui on a crossterm backend.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::AppComponent;
pub use renderer::run_app;
