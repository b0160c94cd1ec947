//! Inclusion predicates applied before sorting.

use super::item::TodoItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    Complete,
    Incomplete,
}

impl FilterKind {
    /// Filter kinds in footer order
    pub const ALL: [FilterKind; 2] = [Self::Complete, Self::Incomplete];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
        }
    }

    #[must_use]
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::Complete => item.is_complete,
            Self::Incomplete => !item.is_complete,
        }
    }
}

/// Active filters, in the order they were switched on.
///
/// Filters are intersected: with both kinds active nothing passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    active: Vec<FilterKind>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches `kind` on if absent, off otherwise. Returns whether it is now active.
    pub fn toggle(&mut self, kind: FilterKind) -> bool {
        if let Some(pos) = self.active.iter().position(|k| *k == kind) {
            self.active.remove(pos);
            false
        } else {
            self.active.push(kind);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, kind: FilterKind) -> bool {
        self.active.contains(&kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FilterKind> + '_ {
        self.active.iter().copied()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Applies every active filter in order
    pub fn apply<'a>(&self, items: Vec<&'a TodoItem>) -> Vec<&'a TodoItem> {
        self.active.iter().fold(items, |list, kind| {
            list.into_iter().filter(|item| kind.matches(item)).collect()
        })
    }
}
