//! Constants used throughout the application
//!
//! UI text, messages and layout values live here so the components stay
//! free of magic strings.

// UI Text
pub const DEFAULT_TITLE: &str = "TODOs list";
pub const DEFAULT_PLACEHOLDER: &str = "What needs to be done?";
pub const FOOTER_SORT_LABEL: &str = "Sort:";
pub const FOOTER_FILTER_LABEL: &str = "Filter:";
pub const EMPTY_LIST_TEXT: &str = "Nothing to do";
pub const EMPTY_FILTERED_TEXT: &str = "No items match the active filters";

// Status Messages
pub const STATUS_ITEM_ADDED: &str = "Item added";
pub const STATUS_ITEM_REMOVED: &str = "Item removed";
pub const STATUS_ITEM_COMPLETED: &str = "Item completed";
pub const STATUS_ITEM_REOPENED: &str = "Item reopened";
pub const STATUS_EMPTY_INPUT: &str = "Type something first";

// Dialog Titles
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc', '?' or 'q' to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// Config / Logging
pub const CONFIG_FILE_NAME: &str = "todolist.toml";
pub const APP_DIR_NAME: &str = "todolist";
pub const LOG_FILE_NAME: &str = "todolist.log";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
/// Entries kept in the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 500;
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

// UI Layout Constants
/// Height of the title block
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the input block including borders
pub const INPUT_HEIGHT: u16 = 3;
/// Height of the sort/filter footer
pub const FOOTER_HEIGHT: u16 = 1;
/// Height of the status line
pub const STATUS_HEIGHT: u16 = 1;
