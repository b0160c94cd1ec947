//! Display ordering for the todo list.

use super::item::TodoItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The single ordering rule applied when the list is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Insertion order
    #[default]
    None,
    CompleteFirst,
    CompleteLast,
    /// Ascending by text, case-sensitive codepoint order
    Alphabetical,
}

impl SortMode {
    /// Modes the user can pick, in footer order
    pub const SELECTABLE: [SortMode; 3] = [Self::CompleteFirst, Self::CompleteLast, Self::Alphabetical];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::CompleteFirst => "complete first",
            Self::CompleteLast => "complete last",
            Self::Alphabetical => "alphabetical",
        }
    }

    /// Result of selecting `selected` while `self` is active
    #[must_use]
    pub fn toggled(self, selected: SortMode) -> SortMode {
        if self == selected {
            SortMode::None
        } else {
            selected
        }
    }

    /// Comparator for this mode; `None` treats every pair as equal
    #[must_use]
    pub fn compare(self, a: &TodoItem, b: &TodoItem) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::CompleteFirst => b.is_complete.cmp(&a.is_complete),
            Self::CompleteLast => a.is_complete.cmp(&b.is_complete),
            Self::Alphabetical => a.text.cmp(&b.text),
        }
    }

    /// Sorts in place. `sort_by` is stable, so equal items keep their relative order.
    pub fn apply(self, items: &mut [&TodoItem]) {
        if self == Self::None {
            return;
        }
        items.sort_by(|a, b| self.compare(a, b));
    }
}
