//! Global Application State Store
//!
//! Reactive mirror of the synchronization core, using Leptos
//! reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{Draft, ErrorKind, FilterMode, Snapshot, Todo};

/// What the components render from
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authoritative list (copied from the core)
    pub todos: Vec<Todo>,
    /// Ids with a request in flight
    pub pending: HashSet<u32>,
    /// Placeholder row while a create is in flight
    pub draft: Draft,
    pub error: Option<ErrorKind>,
    /// New-todo input buffer
    pub new_title: String,
    pub active_count: usize,
    pub completed_count: usize,
    /// Non-empty and every item done
    pub all_completed: bool,
    /// Footer filter, UI-only
    pub filter: FilterMode,
    /// Bumped whenever the new-todo input should take focus
    pub focus_requests: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy a core snapshot into the store, writing only fields that changed
pub fn store_sync(store: &AppStore, snapshot: Snapshot) {
    let Snapshot {
        todos,
        pending,
        draft,
        error,
        new_title,
        active_count,
        completed_count,
        all_completed,
    } = snapshot;

    if store.todos().get_untracked() != todos {
        *store.todos().write() = todos;
    }
    if store.pending().get_untracked() != pending {
        *store.pending().write() = pending;
    }
    if store.draft().get_untracked() != draft {
        *store.draft().write() = draft;
    }
    if store.error().get_untracked() != error {
        *store.error().write() = error;
    }
    if store.new_title().get_untracked() != new_title {
        *store.new_title().write() = new_title;
    }
    if store.active_count().get_untracked() != active_count {
        *store.active_count().write() = active_count;
    }
    if store.completed_count().get_untracked() != completed_count {
        *store.completed_count().write() = completed_count;
    }
    if store.all_completed().get_untracked() != all_completed {
        *store.all_completed().write() = all_completed;
    }
}

/// Ask the header to focus the new-todo input
pub fn store_request_focus(store: &AppStore) {
    *store.focus_requests().write() += 1;
}

/// Currently visible todos
pub fn store_visible_todos(store: &AppStore) -> Vec<Todo> {
    todo_sync::filter_todos(&store.todos().read(), store.filter().get())
}
