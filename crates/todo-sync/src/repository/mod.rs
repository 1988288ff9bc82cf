//! Repository Layer
//!
//! Typed access to the remote item store.

mod http;
mod traits;

pub use http::HttpTodoRepository;
pub use traits::TodoRepository;
