//! Todo Entity
//!
//! A single list entry as stored by the remote API.

use serde::{Deserialize, Serialize};

/// A todo item (matches the remote resource, camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned identifier, 0 for an unsaved placeholder
    pub id: u32,
    /// Owner the item belongs to
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Unsaved placeholder shown while a create is in flight
    pub fn placeholder(user_id: u32, title: String) -> Self {
        Self {
            id: 0,
            user_id,
            title,
            completed: false,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id != 0
    }

    /// Overwrite the fields present in `patch`
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Create payload; the server assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(user_id: u32, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Partial update: only the present fields are sent and applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_unsaved() {
        let todo = Todo::placeholder(7, "Draft".to_string());
        assert_eq!(todo.id, 0);
        assert_eq!(todo.user_id, 7);
        assert!(!todo.completed);
        assert!(!todo.is_saved());
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut todo = Todo {
            id: 1,
            user_id: 7,
            title: "Old".to_string(),
            completed: false,
        };

        todo.apply(&TodoPatch::completed(true));
        assert_eq!(todo.title, "Old");
        assert!(todo.completed);

        todo.apply(&TodoPatch::title("New"));
        assert_eq!(todo.title, "New");
        assert!(todo.completed);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(NewTodo::new(2504, "Buy milk")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "userId": 2504, "title": "Buy milk", "completed": false })
        );

        let todo: Todo = serde_json::from_value(
            serde_json::json!({ "id": 3, "userId": 2504, "title": "x", "completed": true }),
        )
        .unwrap();
        assert_eq!(todo.user_id, 2504);
        assert!(todo.completed);
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let json = serde_json::to_value(TodoPatch::completed(false)).unwrap();
        assert_eq!(json, serde_json::json!({ "completed": false }));
    }
}
