//! Todo Store
//!
//! Owns the authoritative list and keeps it in step with the remote store.
//!
//! Field changes are committed only after the server confirms them; the
//! per-item pending flag and the create placeholder show up immediately.
//! State lives in a `RefCell` that is never borrowed across an `.await`, so
//! any number of operations may be in flight on the same thread.

mod state;


use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::domain::{filter_todos, ErrorKind, FilterMode, NewTodo, Todo, TodoPatch};
use crate::repository::TodoRepository;
use crate::scheduler::Scheduler;

pub use state::{Draft, Snapshot, StoreEvent};
use state::SyncState;

type Listener<R> = Rc<dyn Fn(&TodoStore<R>)>;

struct Inner<R> {
    repo: R,
    scheduler: Box<dyn Scheduler>,
    user_id: u32,
    error_timeout: Duration,
    state: RefCell<SyncState>,
    listeners: RefCell<Vec<Listener<R>>>,
}

/// Synchronization core, cheap to clone (shared handle)
pub struct TodoStore<R> {
    inner: Rc<Inner<R>>,
}

impl<R> Clone for TodoStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: TodoRepository + 'static> TodoStore<R> {
    pub fn new(repo: R, scheduler: impl Scheduler + 'static, config: &ApiConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                repo,
                scheduler: Box::new(scheduler),
                user_id: config.user_id,
                error_timeout: config.error_timeout(),
                state: RefCell::new(SyncState::default()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register a callback run after every state change
    pub fn subscribe(&self, listener: impl Fn(&TodoStore<R>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    // ========================
    // State Helpers
    // ========================

    fn read<T>(&self, f: impl FnOnce(&SyncState) -> T) -> T {
        f(&self.inner.state.borrow())
    }

    fn update<T>(&self, f: impl FnOnce(&mut SyncState) -> T) -> T {
        let out = {
            let mut state = self.inner.state.borrow_mut();
            f(&mut state)
        };
        self.notify();
        out
    }

    fn notify(&self) {
        // Listeners may read the store, so call them on a copy with no borrow held
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(self);
        }
    }

    /// Show `kind` and schedule its auto-clear
    fn fail(&self, kind: ErrorKind) -> ErrorKind {
        let generation = self.update(|s| s.notice.raise(kind));
        let weak: Weak<Inner<R>> = Rc::downgrade(&self.inner);

        self.inner.scheduler.schedule(
            self.inner.error_timeout,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    TodoStore { inner }.expire_error(generation);
                }
            }),
        );
        kind
    }

    fn expire_error(&self, generation: u64) {
        let expired = self.inner.state.borrow_mut().notice.expire(generation);
        if expired {
            self.notify();
        }
    }

    // ========================
    // Operations
    // ========================

    /// Replace the list with the server's copy
    pub async fn load(&self) -> Result<(), ErrorKind> {
        match self.inner.repo.list(self.inner.user_id).await {
            Ok(todos) => {
                info!("Loaded {} todos for user {}", todos.len(), self.inner.user_id);
                self.update(|s| s.todos = todos);
                Ok(())
            }
            Err(e) => {
                warn!("Loading todos failed: {}", e);
                Err(self.fail(ErrorKind::Load))
            }
        }
    }

    /// Create a todo from `title` (trimmed); shows a placeholder meanwhile
    pub async fn create(&self, title: &str) -> Result<Todo, ErrorKind> {
        let title = title.trim();
        if title.is_empty() {
            return Err(self.fail(ErrorKind::EmptyTitle));
        }

        let user_id = self.inner.user_id;
        self.update(|s| s.draft = Draft::Pending(Todo::placeholder(user_id, title.to_string())));

        let result = self.inner.repo.create(&NewTodo::new(user_id, title)).await;

        let created = self.update(|s| {
            s.draft = Draft::Idle;
            s.focus_new_todo();
            match result {
                Ok(todo) => {
                    s.todos.push(todo.clone());
                    s.new_title.clear();
                    Ok(todo)
                }
                Err(e) => Err(e),
            }
        });

        created.map_err(|e| {
            warn!("Creating todo {:?} failed: {}", title, e);
            self.fail(ErrorKind::Add)
        })
    }

    pub async fn toggle(&self, id: u32, completed: bool) -> Result<(), ErrorKind> {
        self.patch(id, TodoPatch::completed(completed)).await
    }

    /// Rename; an empty title deletes the todo, an unchanged one is a no-op
    pub async fn rename(&self, id: u32, title: &str) -> Result<(), ErrorKind> {
        let title = title.trim();
        if title.is_empty() {
            return self.remove(id).await;
        }

        let unchanged = self.read(|s| s.todo(id).is_some_and(|todo| todo.title == title));
        if unchanged {
            debug!("Rename of todo {} is a no-op", id);
            return Ok(());
        }

        self.patch(id, TodoPatch::title(title)).await
    }

    pub async fn remove(&self, id: u32) -> Result<(), ErrorKind> {
        self.update(|s| s.pending.insert(id));

        let result = self.inner.repo.delete(id).await;

        self.update(|s| {
            s.pending.remove(&id);
            if result.is_ok() {
                s.todos.retain(|todo| todo.id != id);
            }
            s.focus_new_todo();
        });

        result.map_err(|e| {
            warn!("Deleting todo {} failed: {}", id, e);
            self.fail(ErrorKind::Delete)
        })
    }

    /// Delete every completed todo; keeps whichever deletes failed
    pub async fn clear_completed(&self) -> Result<(), ErrorKind> {
        let ids = self.read(|s| s.completed_ids());
        self.update(|s| s.pending.extend(ids.iter().copied()));

        let repo = &self.inner.repo;
        let results = join_all(
            ids.iter()
                .map(|&id| async move { (id, repo.delete(id).await) }),
        )
        .await;

        let mut deleted = HashSet::new();
        let mut failed = 0;
        for (id, result) in results {
            match result {
                Ok(()) => {
                    deleted.insert(id);
                }
                Err(e) => {
                    warn!("Deleting completed todo {} failed: {}", id, e);
                    failed += 1;
                }
            }
        }

        self.update(|s| {
            s.settle(&ids);
            s.todos.retain(|todo| !deleted.contains(&todo.id));
            s.focus_new_todo();
        });

        if failed > 0 {
            Err(self.fail(ErrorKind::Delete))
        } else {
            Ok(())
        }
    }

    /// Complete everything, or un-complete everything if all are done.
    /// All-or-nothing: one failed update leaves the whole list untouched.
    pub async fn toggle_all(&self) -> Result<(), ErrorKind> {
        let (target, ids) = self.read(|s| {
            let target = !s.todos.iter().all(|todo| todo.completed);
            let ids: Vec<u32> = s
                .todos
                .iter()
                .filter(|todo| todo.completed != target)
                .map(|todo| todo.id)
                .collect();
            (target, ids)
        });
        self.update(|s| s.pending.extend(ids.iter().copied()));

        let patch = TodoPatch::completed(target);
        let repo = &self.inner.repo;
        let results = join_all(ids.iter().map(|&id| repo.update(id, &patch))).await;

        let failed = results.iter().filter(|result| result.is_err()).count();

        self.update(|s| {
            s.settle(&ids);
            if failed == 0 {
                for todo in s.todos.iter_mut() {
                    todo.completed = target;
                }
            }
        });

        if failed > 0 {
            warn!("{} of {} updates failed, nothing applied", failed, ids.len());
            Err(self.fail(ErrorKind::Update))
        } else {
            Ok(())
        }
    }

    /// Single-field update committed after the server confirms it
    async fn patch(&self, id: u32, patch: TodoPatch) -> Result<(), ErrorKind> {
        self.update(|s| s.pending.insert(id));

        let result = self.inner.repo.update(id, &patch).await;

        self.update(|s| {
            s.pending.remove(&id);
            if result.is_ok() {
                if let Some(todo) = s.todo_mut(id) {
                    todo.apply(&patch);
                }
            }
        });

        result.map(drop).map_err(|e| {
            warn!("Updating todo {} failed: {}", id, e);
            self.fail(ErrorKind::Update)
        })
    }

    // ========================
    // UI Intents
    // ========================

    pub fn dismiss_error(&self) {
        let dismissed = self.inner.state.borrow_mut().notice.dismiss();
        if dismissed {
            self.notify();
        }
    }

    pub fn set_new_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.update(|s| s.new_title = title);
    }

    /// Drain one-shot events
    pub fn take_events(&self) -> Vec<StoreEvent> {
        self.inner.state.borrow_mut().events.drain(..).collect()
    }

    // ========================
    // Accessors
    // ========================

    pub fn todos(&self) -> Vec<Todo> {
        self.read(|s| s.todos.clone())
    }

    pub fn filtered_view(&self, mode: FilterMode) -> Vec<Todo> {
        self.read(|s| filter_todos(&s.todos, mode))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.read(|s| s.snapshot())
    }

    pub fn is_pending(&self, id: u32) -> bool {
        self.read(|s| s.pending.contains(&id))
    }

    pub fn pending_ids(&self) -> HashSet<u32> {
        self.read(|s| s.pending.clone())
    }

    pub fn draft(&self) -> Draft {
        self.read(|s| s.draft.clone())
    }

    pub fn is_creating(&self) -> bool {
        self.read(|s| s.draft.is_pending())
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.read(|s| s.notice.current())
    }

    pub fn new_title(&self) -> String {
        self.read(|s| s.new_title.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.read(|s| s.todos.is_empty())
    }

    pub fn active_count(&self) -> usize {
        self.read(|s| s.active_count())
    }

    pub fn completed_count(&self) -> usize {
        self.read(|s| s.completed_count())
    }

    pub fn has_completed(&self) -> bool {
        self.completed_count() > 0
    }

    /// True only for a non-empty, fully completed list
    pub fn all_completed(&self) -> bool {
        self.read(|s| s.all_completed())
    }
}
