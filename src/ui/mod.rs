//! UI module for todolist
//!
//! Components, layout and the event loop that drives the todo store from the keyboard.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
