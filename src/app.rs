//! Item Manager App
//!
//! Root component: create form, item table and edit modal.

use item_sync::{ApiConfig, HttpItemApi, ManagerState, BASE_URL_ENV};
use leptos::prelude::*;

use crate::components::{EditModal, ErrorBanner, ItemTable, NewItemForm};
use crate::context::ItemsContext;

const TITLE: &str = "Items (Table View)";

#[component]
pub fn App() -> impl IntoView {
    // State
    let state = RwSignal::new(ManagerState::default());

    let api = ApiConfig::from_override(option_env!("ITEMS_API_BASE_URL")).and_then(HttpItemApi::new);
    let api = match api {
        Ok(api) => api,
        Err(e) => {
            log::error!("[APP] Item service not configured ({BASE_URL_ENV}): {e}");
            return view! {
                <div class="container">
                    <h2>{TITLE}</h2>
                    <div class="error-banner" role="alert">{format!("Cannot use item service: {e}")}</div>
                </div>
            }
            .into_any();
        }
    };
    log::info!("[APP] Item service at {}", api.config().base_url());

    let ctx = ItemsContext::new(state, api);

    // Load items on mount
    Effect::new(move |_| {
        ctx.spawn("load", |m| async move { m.load().await });
    });

    view! {
        <div class="container">
            <h2>{TITLE}</h2>

            <ErrorBanner ctx=ctx />

            <NewItemForm ctx=ctx />

            <ItemTable ctx=ctx />

            <EditModal ctx=ctx />
        </div>
    }
    .into_any()
}
