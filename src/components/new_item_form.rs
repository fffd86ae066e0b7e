//! New Item Form Component
//!
//! Name/description inputs for creating items.

use leptos::prelude::*;

use crate::context::ItemsContext;

/// Form for creating new items
#[component]
pub fn NewItemForm(ctx: ItemsContext) -> impl IntoView {
    let state = ctx.state;

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn("create", |m| async move { m.create().await });
    };

    view! {
        <form class="form-box" on:submit=create_item>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || state.with(|s| s.create_form.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_create_name(value));
                }
            />

            <input
                type="text"
                placeholder="Description"
                prop:value=move || state.with(|s| s.create_form.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_create_description(value));
                }
            />

            <button type="submit" class="create-btn">"Add Item"</button>
        </form>
    }
}
