//! Spinner Component

use leptos::prelude::*;

/// Spinning ring; `size` picks the CSS modifier ("page", "button", "inline")
#[component]
pub fn Spinner(#[prop(into)] size: String) -> impl IntoView {
    view! { <div class=format!("spinner spinner-{}", size) role="status"></div> }
}
