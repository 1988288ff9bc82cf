//! Application Context
//!
//! Handle to the synchronization core provided via Leptos Context API.
//! Every method fires the operation and returns; results arrive through
//! the core's change listener.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{ErrorKind, HttpTodoRepository, TodoStore};

pub type Core = TodoStore<HttpTodoRepository>;

/// App-wide core handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    core: StoredValue<Core, LocalStorage>,
}

impl AppContext {
    pub fn new(core: Core) -> Self {
        Self {
            core: StoredValue::new_local(core),
        }
    }

    fn core(&self) -> Core {
        self.core.get_value()
    }

    /// Fetch the list from the backend
    pub fn load(&self) {
        let core = self.core();
        spawn_local(async move {
            let _ = core.load().await;
        });
    }

    pub fn create(&self, title: String) {
        let core = self.core();
        spawn_local(async move {
            let _ = core.create(&title).await;
        });
    }

    pub fn toggle(&self, id: u32, completed: bool) {
        let core = self.core();
        spawn_local(async move {
            let _ = core.toggle(id, completed).await;
        });
    }

    /// Rename and report back, so the edit field can stay open on failure
    pub fn rename(&self, id: u32, title: String, on_done: impl FnOnce(Result<(), ErrorKind>) + 'static) {
        let core = self.core();
        spawn_local(async move {
            on_done(core.rename(id, &title).await);
        });
    }

    pub fn remove(&self, id: u32) {
        let core = self.core();
        spawn_local(async move {
            let _ = core.remove(id).await;
        });
    }

    pub fn toggle_all(&self) {
        let core = self.core();
        spawn_local(async move {
            let _ = core.toggle_all().await;
        });
    }

    pub fn clear_completed(&self) {
        let core = self.core();
        spawn_local(async move {
            let _ = core.clear_completed().await;
        });
    }

    pub fn dismiss_error(&self) {
        self.core().dismiss_error();
    }

    pub fn set_new_title(&self, title: String) {
        self.core().set_new_title(title);
    }
}
