//! Item Table Component
//!
//! One row per item in server order, with edit and delete actions.

use item_sync::Item;
use leptos::prelude::*;

use crate::context::ItemsContext;

#[component]
pub fn ItemTable(ctx: ItemsContext) -> impl IntoView {
    let state = ctx.state;
    let loaded = move || state.with(|s| s.loaded);
    let is_empty = move || state.with(|s| s.items.is_empty());

    view! {
        <table class="styled-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"NAME"</th>
                    <th>"DESCRIPTION"</th>
                    <th>"ACTIONS"</th>
                </tr>
            </thead>

            <tbody>
                <Show when=move || !loaded()>
                    <tr class="placeholder-row">
                        <td colspan="4">"Loading items..."</td>
                    </tr>
                </Show>
                <Show when=move || loaded() && is_empty()>
                    <tr class="placeholder-row">
                        <td colspan="4">"No items yet"</td>
                    </tr>
                </Show>

                <For
                    each=move || state.with(|s| s.items.clone())
                    // Key on every displayed field so edits re-render the row
                    key=|item| (item.id, item.name.clone(), item.description.clone())
                    children=move |item| view! { <ItemRow ctx=ctx item=item /> }
                />
            </tbody>
        </table>
    }
}

/// A single table row
#[component]
fn ItemRow(ctx: ItemsContext, item: Item) -> impl IntoView {
    let id = item.id;
    let name = item.name.clone();
    let description = item.description.clone();

    view! {
        <tr>
            <td>{id}</td>
            <td>{name}</td>
            <td>{description}</td>
            <td>
                <button
                    class="edit-btn"
                    on:click=move |_| ctx.with_manager(|m| m.begin_edit(&item))
                >
                    "Edit"
                </button>

                <button
                    class="delete-btn"
                    on:click=move |_| ctx.spawn("delete", move |m| async move { m.delete(id).await })
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
