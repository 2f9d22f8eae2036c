//! View-model rows and the boundary traits a front end implements.

use async_trait::async_trait;
use shared::domain::TodoId;

use crate::list_state::TodoList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Toggle(TodoId),
    Edit(TodoId),
    Delete(TodoId),
}

impl RowAction {
    pub fn id(&self) -> &TodoId {
        match self {
            RowAction::Toggle(id) | RowAction::Edit(id) | RowAction::Delete(id) => id,
        }
    }
}

/// One rendered line: a checkbox, a label and the edit/delete affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl TodoRow {
    pub fn toggle(&self) -> RowAction {
        RowAction::Toggle(self.id.clone())
    }

    pub fn edit(&self) -> RowAction {
        RowAction::Edit(self.id.clone())
    }

    pub fn delete(&self) -> RowAction {
        RowAction::Delete(self.id.clone())
    }
}

pub fn render_rows(list: &TodoList) -> Vec<TodoRow> {
    list.iter()
        .map(|todo| TodoRow {
            id: todo.id.clone(),
            title: todo.title.clone(),
            completed: todo.completed,
        })
        .collect()
}

pub trait ListView: Send + Sync {
    fn render(&self, rows: &[TodoRow]);
    fn set_loading(&self, loading: bool);
    /// Called after a successful creation so the title input can be emptied.
    fn clear_input(&self);
}

/// Request/response replacement for blocking confirm and prompt dialogs.
#[async_trait]
pub trait Interaction: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
    /// `None` means the user cancelled.
    async fn prompt(&self, message: &str, initial: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::protocol::TodoPayload;

    #[test]
    fn rows_mirror_list_order_and_expose_actions() {
        let mut list = TodoList::new();
        list.replace_all(vec![
            TodoPayload {
                id: TodoId::from("a"),
                title: Some("first".to_string()),
                completed: Some(true),
                user_id: None,
            },
            TodoPayload {
                id: TodoId::from("b"),
                title: Some("second".to_string()),
                completed: None,
                user_id: None,
            },
        ]);

        let rows = render_rows(&list);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "first");
        assert!(rows[0].completed);
        assert!(!rows[1].completed);
        assert_eq!(rows[1].delete(), RowAction::Delete(TodoId::from("b")));
        assert_eq!(rows[0].toggle().id(), &TodoId::from("a"));
    }
}
