//! Filter Utilities
//!
//! Projection of the todo list by completion state.

use super::Todo;

/// Which subset of the list is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !todo.completed,
            FilterMode::Completed => todo.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// Location hash used by the footer links
    pub fn href(&self) -> &'static str {
        match self {
            FilterMode::All => "#/",
            FilterMode::Active => "#/active",
            FilterMode::Completed => "#/completed",
        }
    }
}

/// Keep the items matching `mode`, preserving order
pub fn filter_todos(todos: &[Todo], mode: FilterMode) -> Vec<Todo> {
    todos.iter().filter(|todo| mode.matches(todo)).cloned().collect()
}
