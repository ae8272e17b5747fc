//! Far Away App
//!
//! Root component: owns the store and lays out logo, form, list and stats.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, Logo, PackingList, StatsFooter};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State lives here and is shared with every child through context
    let state = AppState::from_config(&config);
    log::info!("[APP] Starting with {} items, sorted by {}", state.list.len(), state.sort_by);
    provide_context(Store::new(state));
    provide_context(AppContext::new(config));

    view! {
        <div class="app">
            <Logo />
            <AddItemForm />
            <PackingList />
            <StatsFooter />
        </div>
    }
}
