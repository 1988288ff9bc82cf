//! Todo Header Component
//!
//! Toggle-all button and the new-todo form.

use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let input_ref = NodeRef::<html::Input>::new();

    let is_creating = move || store.draft().read().is_pending();
    let all_completed = move || store.all_completed().get();

    // Focus on mount and whenever the core asks for it.
    // Deferred a frame so the input is re-enabled first.
    Effect::new(move |_| {
        let _ = store.focus_requests().get();
        request_animation_frame(move || {
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.create(store.new_title().get_untracked());
    };

    view! {
        <header class="todoapp__header">
            <Show when=move || !is_creating() && !store.todos().read().is_empty()>
                <button
                    type="button"
                    class="todoapp__toggle-all"
                    class:active=all_completed
                    on:click=move |_| ctx.toggle_all()
                ></button>
            </Show>

            <form on:submit=on_submit>
                <input
                    node_ref=input_ref
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    prop:value=move || store.new_title().get()
                    prop:disabled=is_creating
                    on:input=move |ev| ctx.set_new_title(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
