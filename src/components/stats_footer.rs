//! Stats Footer Component

use leptos::prelude::*;

use crate::store::{store_stats, use_app_store};

/// Footer summarising how much is packed
#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();

    view! {
        <footer class="stats">
            <em>{move || store_stats(&store).message()}</em>
        </footer>
    }
}
