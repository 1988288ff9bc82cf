//! Error Notification Component
//!
//! Dismissible banner for the current error, hidden when there is none.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let message = move || store.error().get().map(|kind| kind.to_string()).unwrap_or_default();

    view! {
        <div
            class="notification is-danger is-light has-text-weight-normal"
            class:hidden=move || store.error().get().is_none()
        >
            <button type="button" class="delete" on:click=move |_| ctx.dismiss_error()></button>
            {message}
        </div>
    }
}
