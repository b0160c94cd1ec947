//! Reusable UI components

pub mod dialogs;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod todo_item_component;

// Component architecture
pub mod dialog_component;
pub mod footer_component;
pub mod input_component;
pub mod todo_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use footer_component::FooterComponent;
pub use input_component::InputComponent;
pub use status_bar::StatusBar;
pub use todo_list_component::TodoListComponent;
