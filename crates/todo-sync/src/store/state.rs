//! Store State
//!
//! Plain data owned by `TodoStore`. No I/O, no callbacks.

use std::collections::{HashSet, VecDeque};

use crate::domain::{ErrorKind, Todo};

/// Optimistic placeholder for a create in flight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Draft {
    #[default]
    Idle,
    /// Holds the id-0 placeholder shown as a loading row
    Pending(Todo),
}

impl Draft {
    pub fn todo(&self) -> Option<&Todo> {
        match self {
            Draft::Idle => None,
            Draft::Pending(todo) => Some(todo),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Draft::Pending(_))
    }
}

/// One-shot intents for the presentation layer, drained with `take_events`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// Return keyboard focus to the new-todo input
    FocusNewTodo,
}

/// Current error banner plus a generation counter so a stale
/// auto-clear never wipes a newer error
#[derive(Debug, Default)]
pub(crate) struct Notice {
    current: Option<ErrorKind>,
    generation: u64,
}

impl Notice {
    pub fn current(&self) -> Option<ErrorKind> {
        self.current
    }

    /// Show `kind`, returns the generation to pass to `expire`
    pub fn raise(&mut self, kind: ErrorKind) -> u64 {
        self.generation += 1;
        self.current = Some(kind);
        self.generation
    }

    /// Clear if nothing newer was raised since `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }
}

/// Everything the store tracks
#[derive(Debug, Default)]
pub(crate) struct SyncState {
    /// Authoritative list, server order plus appended creates
    pub todos: Vec<Todo>,
    /// Ids with a request in flight
    pub pending: HashSet<u32>,
    pub draft: Draft,
    pub notice: Notice,
    /// New-todo input buffer
    pub new_title: String,
    pub events: VecDeque<StoreEvent>,
}

impl SyncState {
    pub fn todo(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn todo_mut(&mut self, id: u32) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }

    pub fn completed_ids(&self) -> Vec<u32> {
        self.todos
            .iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.id)
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.len() - self.active_count()
    }

    /// False for an empty list
    pub fn all_completed(&self) -> bool {
        !self.todos.is_empty() && self.active_count() == 0
    }

    pub fn focus_new_todo(&mut self) {
        self.events.push_back(StoreEvent::FocusNewTodo);
    }

    pub fn settle(&mut self, ids: &[u32]) {
        for id in ids {
            self.pending.remove(id);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            todos: self.todos.clone(),
            pending: self.pending.clone(),
            draft: self.draft.clone(),
            error: self.notice.current(),
            new_title: self.new_title.clone(),
            active_count: self.active_count(),
            completed_count: self.completed_count(),
            all_completed: self.all_completed(),
        }
    }
}

/// Read-only copy of the store for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub todos: Vec<Todo>,
    pub pending: HashSet<u32>,
    pub draft: Draft,
    pub error: Option<ErrorKind>,
    pub new_title: String,
    pub active_count: usize,
    pub completed_count: usize,
    pub all_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_expire_keeps_newer_error() {
        let mut notice = Notice::default();
        let first = notice.raise(ErrorKind::Add);
        let second = notice.raise(ErrorKind::Delete);

        assert!(!notice.expire(first));
        assert_eq!(notice.current(), Some(ErrorKind::Delete));

        assert!(notice.expire(second));
        assert_eq!(notice.current(), None);
    }

    #[test]
    fn test_dismiss_then_expire_is_noop() {
        let mut notice = Notice::default();
        let generation = notice.raise(ErrorKind::Load);

        assert!(notice.dismiss());
        assert!(!notice.expire(generation));
        assert!(!notice.dismiss());
    }

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    #[test]
    fn test_snapshot_counts() {
        let mut state = SyncState::default();
        let empty = state.snapshot();
        assert_eq!(empty.active_count, 0);
        assert!(!empty.all_completed);

        state.todos = vec![make_todo(1, true), make_todo(2, false), make_todo(3, true)];
        let snapshot = state.snapshot();
        assert_eq!(snapshot.active_count, 1);
        assert_eq!(snapshot.completed_count, 2);
        assert!(!snapshot.all_completed);

        state.todo_mut(2).expect("todo 2 missing").completed = true;
        let snapshot = state.snapshot();
        assert_eq!(snapshot.active_count, 0);
        assert!(snapshot.all_completed);
    }

    #[test]
    fn test_draft_accessors() {
        assert!(Draft::Idle.todo().is_none());

        let draft = Draft::Pending(Todo::placeholder(1, "x".to_string()));
        assert!(draft.is_pending());
        assert_eq!(draft.todo().map(|t| t.id), Some(0));
    }
}
