//! Todo Footer Component
//!
//! Items-left counter, filter links and "Clear completed".

use leptos::prelude::*;
use todo_sync::FilterMode;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoFooter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let active_count = move || store.active_count().get();
    let has_completed = move || store.completed_count().get() > 0;

    view! {
        <footer class="todoapp__footer">
            <span class="todo-count">{move || format!("{} items left", active_count())}</span>

            <nav class="filter">
                {FilterMode::ALL.into_iter().map(move |mode| view! {
                    <a
                        href=mode.href()
                        class="filter__link"
                        class:selected=move || store.filter().get() == mode
                        on:click=move |ev| {
                            ev.prevent_default();
                            *store.filter().write() = mode;
                        }
                    >
                        {mode.label()}
                    </a>
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                prop:disabled=move || !has_completed()
                on:click=move |_| ctx.clear_completed()
            >
                "Clear completed"
            </button>
        </footer>
    }
}
