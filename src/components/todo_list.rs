//! Todo List Component
//!
//! Visible todos plus the placeholder row of a pending create.

use leptos::prelude::*;

use super::{DraftItem, TodoItem};
use crate::store::{store_visible_todos, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="todoapp__main">
            <For
                each=move || store_visible_todos(&store)
                // Re-render a row when its fields change
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />

            {move || store.draft().get().todo().cloned().map(|todo| view! { <DraftItem todo=todo /> })}
        </section>
    }
}
