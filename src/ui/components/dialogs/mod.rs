pub mod common;
pub mod help_dialog;
pub mod logs_dialog;
pub mod scroll_behavior;

pub use help_dialog::render_help_dialog;
pub use logs_dialog::render_logs_dialog;
pub use scroll_behavior::DialogScroll;
