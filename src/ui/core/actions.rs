use crate::store::{FilterKind, SortMode, TodoId};

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::List,
            Self::List => Self::Input,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Input line
    InputChar(char),
    InputBackspace,
    SubmitInput,

    // Item operations
    ToggleItem(TodoId),
    RemoveItem(TodoId),

    // View state
    ToggleSort(SortMode),
    ToggleFilter(FilterKind),

    // Navigation
    NextItem,
    PreviousItem,
    FirstItem,
    LastItem,
    SetFocus(Focus),
    CycleFocus,

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,
    DialogScrollUp,
    DialogScrollDown,
    DialogScrollToTop,
    DialogScrollToBottom,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
