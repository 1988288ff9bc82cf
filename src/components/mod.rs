//! UI Components
//!
//! Leptos components rendering the reactive store.

mod error_notification;
mod todo_footer;
mod todo_header;
mod todo_item;
mod todo_list;

pub use error_notification::ErrorNotification;
pub use todo_footer::TodoFooter;
pub use todo_header::TodoHeader;
pub use todo_item::{DraftItem, TodoItem};
pub use todo_list::TodoList;
