//! Todo Item Component
//!
//! A single row: checkbox, title (double-click to edit), delete button
//! and a loader overlay while the item has a request in flight.

use leptos::html;
use leptos::prelude::*;
use todo_sync::Todo;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Loader overlay shown over a busy row
#[component]
fn Loader(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <div class="modal overlay" class:is-active=move || active.get()>
            <div class="modal-background has-background-white-ter"></div>
            <div class="loader"></div>
        </div>
    }
}

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let Todo {
        id,
        title,
        completed,
        ..
    } = todo;

    let (editing, set_editing) = signal(false);
    let (saving, set_saving) = signal(false);
    let (edit_title, set_edit_title) = signal(title.clone());
    let original_title = StoredValue::new(title);
    let edit_ref = NodeRef::<html::Input>::new();

    let is_loading = move || store.pending().read().contains(&id);

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Enter and blur both land here; ignore the blur that follows a submit
    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let new_title = edit_title.get_untracked();
        set_saving.set(true);
        ctx.rename(id, new_title.clone(), move |result| {
            set_saving.try_set(false);
            // An emptied title deletes the row, keep the field until it is gone
            if result.is_ok() && !new_title.trim().is_empty() {
                set_editing.try_set(false);
            }
        });
    };

    let cancel = move || {
        set_edit_title.set(original_title.get_value());
        set_editing.set(false);
    };

    view! {
        <div class="todo" class:completed=completed on:dblclick=move |_| set_editing.set(true)>
            <label class="todo__status-label">
                <input
                    type="checkbox"
                    class="todo__status"
                    prop:checked=completed
                    prop:disabled=is_loading
                    on:change=move |_| ctx.toggle(id, !completed)
                />
            </label>

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="todo__title">{original_title.get_value()}</span>
                    <button
                        type="button"
                        class="todo__remove"
                        prop:disabled=is_loading
                        on:click=move |_| ctx.remove(id)
                    >
                        "×"
                    </button>
                }
            >
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    save();
                }>
                    <input
                        node_ref=edit_ref
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        prop:value=move || edit_title.get()
                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                        on:blur=move |_| save()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                cancel();
                            }
                        }
                    />
                </form>
            </Show>

            <Loader active=Signal::derive(is_loading) />
        </div>
    }
}

/// Non-interactive row for a create in flight
#[component]
pub fn DraftItem(todo: Todo) -> impl IntoView {
    view! {
        <div class="todo">
            <label class="todo__status-label">
                <input type="checkbox" class="todo__status" disabled=true />
            </label>

            <span class="todo__title">{todo.title}</span>

            <Loader active=true />
        </div>
    }
}
