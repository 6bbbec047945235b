//! Todo-list state, independent of any rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for todo-list operations.
pub type TodoResult<T> = Result<T, TodoError>;

/// Errors raised by the todo-list model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// A title was empty after trimming.
    #[error("todo titles must not be blank")]
    BlankTitle,

    /// No item carries the given id.
    #[error("no todo with id {id}")]
    UnknownId {
        /// The id that resolved to nothing.
        id: u64,
    },
}

/// One todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable id, unique within the list.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Completion flag.
    pub done: bool,
}

/// An ordered todo list with stable ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A list seeded with the given titles, all active.
    ///
    /// # Errors
    ///
    /// Returns an error if any seed title is blank.
    pub fn seeded(titles: &[&str]) -> TodoResult<Self> {
        let mut list = Self::new();
        for title in titles {
            list.add(title)?;
        }
        Ok(list)
    }

    /// Add an item and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed title is empty.
    pub fn add(&mut self, title: &str) -> TodoResult<u64> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::BlankTitle);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(TodoItem {
            id,
            title: title.to_string(),
            done: false,
        });
        Ok(id)
    }

    /// Flip an item's completion flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown.
    pub fn toggle(&mut self, id: u64) -> TodoResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(TodoError::UnknownId { id })?;
        item.done = !item.done;
        Ok(())
    }

    /// Remove an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown.
    pub fn remove(&mut self, id: u64) -> TodoResult<()> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Err(TodoError::UnknownId { id });
        }
        Ok(())
    }

    /// Drop every completed item and report how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.done);
        before - self.items.len()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of items still active.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }

    /// Number of completed items.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.items.len() - self.remaining()
    }

    /// Total item count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The footer label, pluralized the way the UI shows it.
    #[must_use]
    pub fn remaining_label(&self) -> String {
        match self.remaining() {
            1 => "1 item left".to_string(),
            n => format!("{n} items left"),
        }
    }
}
