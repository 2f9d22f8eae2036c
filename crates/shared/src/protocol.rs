use serde::{Deserialize, Serialize};

use crate::domain::{OwnerId, TodoId};

/// A task exactly as the remote collection returns it. Only `id` is required;
/// everything else is filled in by [`Todo::from`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoPayload {
    pub id: TodoId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(
        rename = "userId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<OwnerId>,
}

/// Normalized task record held by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub owner_id: OwnerId,
}

impl From<TodoPayload> for Todo {
    fn from(payload: TodoPayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title.unwrap_or_default(),
            completed: payload.completed.unwrap_or(false),
            owner_id: payload.user_id.unwrap_or_default(),
        }
    }
}

/// Body of a creation request. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: OwnerId,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            user_id: OwnerId::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_without_optional_fields_normalizes_to_defaults() {
        let payload: TodoPayload =
            serde_json::from_str(r#"{"id":"3","title":"Buy milk"}"#).expect("payload");
        let todo = Todo::from(payload);
        assert_eq!(todo.id, TodoId::from("3"));
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.owner_id, OwnerId(1));
    }

    #[test]
    fn todo_serializes_with_wire_field_names() {
        let todo = Todo {
            id: TodoId::Number(4),
            title: "Walk".to_string(),
            completed: true,
            owner_id: OwnerId(2),
        };
        let value = serde_json::to_value(&todo).expect("json");
        assert_eq!(
            value,
            serde_json::json!({ "id": 4, "title": "Walk", "completed": true, "userId": 2 })
        );
    }

    #[test]
    fn draft_carries_default_owner_and_open_state() {
        let value = serde_json::to_value(TodoDraft::new("Read")).expect("json");
        assert_eq!(
            value,
            serde_json::json!({ "title": "Read", "completed": false, "userId": 1 })
        );
    }
}
