//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use crate::store::{FilterKind, SortMode};
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Item status icons
#[derive(Debug, Clone)]
pub struct ItemIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Add/remove hints
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub add: &'static str,
    pub remove: &'static str,
}

/// Footer sort buttons
#[derive(Debug, Clone)]
pub struct SortIcons {
    pub complete_first: &'static str,
    pub complete_last: &'static str,
    pub alphabetical: &'static str,
}

/// Footer filter buttons
#[derive(Debug, Clone)]
pub struct FilterIcons {
    pub complete: &'static str,
    pub incomplete: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub item: ItemIcons,
    pub actions: ActionIcons,
    pub sort: SortIcons,
    pub filter: FilterIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            item: ItemIcons {
                pending: "⬜",
                completed: "✅",
            },
            actions: ActionIcons { add: "➕", remove: "❌" },
            sort: SortIcons {
                complete_first: "🔽",
                complete_last: "🔼",
                alphabetical: "🔤",
            },
            filter: FilterIcons {
                complete: "☑️",
                incomplete: "➖",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            item: ItemIcons {
                pending: " ",
                completed: "✓",
            },
            actions: ActionIcons { add: "+", remove: "✗" },
            sort: SortIcons {
                complete_first: "↓✓",
                complete_last: "↑✓",
                alphabetical: "↓A",
            },
            filter: FilterIcons {
                complete: "✓",
                incomplete: "−",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            item: ItemIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            actions: ActionIcons { add: "+", remove: "x" },
            sort: SortIcons {
                complete_first: "[done^]",
                complete_last: "[done_]",
                alphabetical: "[a-z]",
            },
            filter: FilterIcons {
                complete: "[done]",
                incomplete: "[open]",
            },
        }
    }

    #[must_use]
    pub fn item_pending(&self) -> &'static str {
        self.icons().item.pending
    }

    #[must_use]
    pub fn item_completed(&self) -> &'static str {
        self.icons().item.completed
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().actions.add
    }

    #[must_use]
    pub fn remove(&self) -> &'static str {
        self.icons().actions.remove
    }

    /// Footer button for a sort mode; `None` has no button
    #[must_use]
    pub fn sort(&self, mode: SortMode) -> &'static str {
        let icons = self.icons().sort;
        match mode {
            SortMode::None => "",
            SortMode::CompleteFirst => icons.complete_first,
            SortMode::CompleteLast => icons.complete_last,
            SortMode::Alphabetical => icons.alphabetical,
        }
    }

    #[must_use]
    pub fn filter(&self, kind: FilterKind) -> &'static str {
        let icons = self.icons().filter;
        match kind {
            FilterKind::Complete => icons.complete,
            FilterKind::Incomplete => icons.incomplete,
        }
    }
}
