//! Edit Modal Component
//!
//! Overlay for editing one item, shown while an edit session is open.

use leptos::prelude::*;

use crate::context::ItemsContext;

#[component]
pub fn EditModal(ctx: ItemsContext) -> impl IntoView {
    let state = ctx.state;
    let name_input = NodeRef::<leptos::html::Input>::new();

    // Focus the name field whenever the modal mounts, so Escape reaches the overlay
    Effect::new(move |_| {
        if let Some(input) = name_input.get() {
            let _ = input.focus();
        }
    });

    let name = move || {
        state.with(|s| {
            s.editing
                .as_ref()
                .map(|e| e.draft.name.clone())
                .unwrap_or_default()
        })
    };
    let description = move || {
        state.with(|s| {
            s.editing
                .as_ref()
                .map(|e| e.draft.description.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || state.with(|s| s.is_editing())>
            <div
                class="modal-overlay"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ctx.with_manager(|m| m.cancel_edit());
                    }
                }
            >
                <div class="modal">
                    <h3>"Edit Item"</h3>

                    <input
                        type="text"
                        node_ref=name_input
                        prop:value=name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_edit_name(value));
                        }
                    />

                    <textarea
                        prop:value=description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_edit_description(value));
                        }
                    />

                    <button
                        class="update-btn"
                        on:click=move |_| ctx.spawn("update", |m| async move { m.update().await })
                    >
                        "Update"
                    </button>
                    <button class="cancel-btn" on:click=move |_| ctx.with_manager(|m| m.cancel_edit())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}
