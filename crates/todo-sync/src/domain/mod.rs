//! Domain Layer
//!
//! Todo entities, filtering and the error taxonomy.
//! This layer has NO I/O (serde only, for the wire format).

mod error;
mod filter;
mod todo;

pub use error::{ErrorKind, RepoError, RepoResult};
pub use filter::{filter_todos, FilterMode};
pub use todo::{NewTodo, Todo, TodoPatch};
