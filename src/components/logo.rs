//! Logo Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// App heading
#[component]
pub fn Logo() -> impl IntoView {
    let ctx = use_app_context();

    view! { <h1>{ctx.title()}</h1> }
}
