//! Core UI functionality.
//!
//! The building blocks every component relies on:
//!
//! - [`actions`] - user intents and UI state transitions
//! - [`component`] - the [`Component`] trait for key handling and rendering
//! - [`event_handler`] - terminal event polling and ticks
//!
//! Key presses are turned into an [`Action`] by the focused component, passed
//! through every component's `update`, and whatever is left is applied to the
//! todo store by the app component.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
