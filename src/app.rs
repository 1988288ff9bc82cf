//! Todo Sync Frontend App
//!
//! Wires the synchronization core to the reactive store and lays out
//! header, list, footer and error banner.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{ApiConfig, HttpTodoRepository, StoreEvent, TodoStore};

use crate::components::{ErrorNotification, TodoFooter, TodoHeader, TodoList};
use crate::context::AppContext;
use crate::scheduler::BrowserScheduler;
use crate::store::{store_request_focus, store_sync, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env_vars(option_env!("TODO_API_URL"), option_env!("TODO_USER_ID"));
    tracing::info!("Using {} for user {}", config.base_url, config.user_id);

    let repo = HttpTodoRepository::new(config.clone()).expect("HTTP client should build");
    let core = TodoStore::new(repo, BrowserScheduler, &config);

    let store = Store::new(AppState::default());

    // Mirror every core change into the reactive store
    core.subscribe(move |core| {
        store_sync(&store, core.snapshot());
        for event in core.take_events() {
            match event {
                StoreEvent::FocusNewTodo => store_request_focus(&store),
            }
        }
    });

    let ctx = AppContext::new(core);
    provide_context(store);
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| ctx.load());

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <TodoHeader />

                <TodoList />

                <Show when=move || !store.todos().read().is_empty()>
                    <TodoFooter />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
}
