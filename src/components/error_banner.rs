//! Error Banner Component

use leptos::prelude::*;

use crate::context::ItemsContext;

/// Shows the last failed request until dismissed or the next successful reload
#[component]
pub fn ErrorBanner(ctx: ItemsContext) -> impl IntoView {
    view! {
        {move || ctx.state.with(|s| s.last_error.clone()).map(|message| view! {
            <div class="error-banner" role="alert">
                <span>{message}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.with_manager(|m| m.dismiss_error())>
                    "×"
                </button>
            </div>
        })}
    }
}
