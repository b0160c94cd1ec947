use serde::{Deserialize, Serialize};

/// Identifier of a todo item, derived from its creation time in milliseconds
pub type TodoId = i64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub is_complete: bool,
}

impl TodoItem {
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_complete: false,
        }
    }

    /// Flips the completion flag and returns the new value
    pub fn toggle(&mut self) -> bool {
        self.is_complete = !self.is_complete;
        self.is_complete
    }
}
