//! Repository Layer - Core Trait
//!
//! The four resource operations the store needs from the backend.
//! Implementations: HTTP (`HttpTodoRepository`) and an in-memory fake for tests.

use async_trait::async_trait;

use crate::domain::{NewTodo, RepoResult, Todo, TodoPatch};

/// Remote item store, scoped by owner id
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TodoRepository {
    /// Fetch all items for an owner
    async fn list(&self, user_id: u32) -> RepoResult<Vec<Todo>>;

    /// Create an item, the server assigns the id
    async fn create(&self, todo: &NewTodo) -> RepoResult<Todo>;

    /// Modify only the fields present in `patch`
    async fn update(&self, id: u32, patch: &TodoPatch) -> RepoResult<Todo>;

    /// Delete an item by id
    async fn delete(&self, id: u32) -> RepoResult<()>;
}
