//! todo-sync
//!
//! Keeps an in-memory todo list in step with a remote HTTP store.
//!
//! Layered architecture:
//! - domain: entities, filtering and error kinds
//! - repository: access to the remote item store
//! - store: the synchronization core the UI talks to

pub mod config;
pub mod domain;
pub mod repository;
pub mod scheduler;
pub mod store;

#[cfg(test)]
mod testing;

pub use config::ApiConfig;
pub use domain::{filter_todos, ErrorKind, FilterMode, NewTodo, RepoError, Todo, TodoPatch};
pub use repository::{HttpTodoRepository, TodoRepository};
pub use scheduler::Scheduler;
pub use store::{Draft, Snapshot, StoreEvent, TodoStore};
