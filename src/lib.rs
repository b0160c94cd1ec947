//! todolist - a terminal todo list
//!
//! This library provides an in-memory todo list store with sorting and
//! filtering, plus a terminal interface built with Ratatui on top of it.
//!
//! # Modules
//!
//! * [`store`] - Todo items, sort modes, filters and the list store
//! * [`config`] - Application configuration management
//! * [`logger`] - Log routing to the in-app buffer and an optional file
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Todo items and the list store
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

pub use store::{FilterKind, SortMode, TodoId, TodoItem, TodoListStore};
