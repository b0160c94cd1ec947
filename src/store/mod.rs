//! In-memory todo list state.
//!
//! [`TodoListStore`] owns the ordered item sequence together with the
//! transient UI state around it: the pending input text, the active
//! [`SortMode`] and the active [`FilterSet`]. Every operation is total;
//! unknown ids and empty text are ignored rather than reported.
//!
//! ```
//! use todolist::store::{FilterKind, SortMode, TodoListStore};
//!
//! let mut store = TodoListStore::new();
//! store.add("b");
//! let a = store.add("a").unwrap();
//! store.toggle(a);
//!
//! store.set_sort(SortMode::Alphabetical);
//! let texts: Vec<String> = store.view().iter().map(|i| i.text.clone()).collect();
//! assert_eq!(texts, ["a", "b"]);
//!
//! store.set_filter(FilterKind::Incomplete);
//! assert_eq!(store.view().len(), 1);
//! ```

pub mod clock;
pub mod filters;
pub mod item;
pub mod sorting;

pub use clock::{Clock, FixedClock, SystemClock};
pub use filters::{FilterKind, FilterSet};
pub use item::{TodoId, TodoItem};
pub use sorting::SortMode;

use log::debug;

pub struct TodoListStore<C: Clock = SystemClock> {
    items: Vec<TodoItem>,
    input: String,
    sort_mode: SortMode,
    filters: FilterSet,
    clock: C,
    last_id: Option<TodoId>,
}

impl Default for TodoListStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListStore<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> TodoListStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            items: Vec::new(),
            input: String::new(),
            sort_mode: SortMode::None,
            filters: FilterSet::new(),
            clock,
            last_id: None,
        }
    }

    /// Appends a new incomplete item and clears the pending input.
    ///
    /// Empty text is ignored and leaves the input untouched.
    pub fn add(&mut self, text: impl Into<String>) -> Option<TodoId> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id();
        debug!("store: adding item {} '{}'", id, text);
        self.items.push(TodoItem::new(id, text));
        self.input.clear();
        Some(id)
    }

    /// Removes the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!("store: removed item {}", id);
        }
        removed
    }

    /// Flips completion of the item with `id` in place. Returns the new state.
    pub fn toggle(&mut self, id: TodoId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        let complete = item.toggle();
        debug!("store: item {} complete={}", id, complete);
        Some(complete)
    }

    /// Selects `mode`, or resets to [`SortMode::None`] if it is already active
    pub fn set_sort(&mut self, mode: SortMode) -> SortMode {
        self.sort_mode = self.sort_mode.toggled(mode);
        self.sort_mode
    }

    /// Toggles `kind` in the active filter set. Returns whether it is now active.
    pub fn set_filter(&mut self, kind: FilterKind) -> bool {
        self.filters.toggle(kind)
    }

    /// Items as displayed: active filters first, then the active sort
    #[must_use]
    pub fn view(&self) -> Vec<&TodoItem> {
        let mut visible = self.filters.apply(self.items.iter().collect());
        self.sort_mode.apply(&mut visible);
        visible
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_input(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn pop_input(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// Adds the pending input as a new item
    pub fn submit_input(&mut self) -> Option<TodoId> {
        let text = self.input.clone();
        self.add(text)
    }

    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items in insertion order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_complete).count()
    }

    #[must_use]
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    #[must_use]
    pub fn is_filter_active(&self, kind: FilterKind) -> bool {
        self.filters.contains(kind)
    }

    /// Drops all items and transient state
    pub fn reset(&mut self) {
        self.items.clear();
        self.input.clear();
        self.sort_mode = SortMode::None;
        self.filters.clear();
        self.last_id = None;
    }

    /// Creation time in milliseconds, bumped past the previous id when the clock
    /// has not advanced
    fn next_id(&mut self) -> TodoId {
        let now = self.clock.now().timestamp_millis();
        let id = match self.last_id {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_id = Some(id);
        id
    }
}
