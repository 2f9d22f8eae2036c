//! In-memory ordered todo collection.

use shared::{
    domain::TodoId,
    protocol::{Todo, TodoPayload},
};

/// Fields to merge into an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }

    /// Copy of `todo` with the patch applied.
    pub fn apply_to(&self, todo: &Todo) -> Todo {
        let mut next = todo.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(completed) = self.completed {
            next.completed = completed;
        }
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, records: impl IntoIterator<Item = TodoPayload>) {
        self.items = records.into_iter().map(Todo::from).collect();
    }

    pub fn prepend(&mut self, record: TodoPayload) {
        self.items.insert(0, Todo::from(record));
    }

    /// Returns false when no record has `id`.
    pub fn patch(&mut self, id: &TodoId, fields: &TodoPatch) -> bool {
        match self.items.iter_mut().find(|todo| &todo.id == id) {
            Some(todo) => {
                *todo = fields.apply_to(todo);
                true
            }
            None => false,
        }
    }

    /// Returns false when no record has `id`.
    pub fn remove(&mut self, id: &TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|todo| &todo.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| &todo.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<&TodoId> {
        self.items.get(index).map(|todo| &todo.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/list_state_tests.rs"]
mod tests;
