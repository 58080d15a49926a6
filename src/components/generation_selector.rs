//! Generation Selector Component
//!
//! Single-select generation buttons. "All Generations" clears the filter.

use leptos::prelude::*;

use crate::store::{store_set_generation, use_app_store, AppStateStoreFields};

fn button_class(active: bool) -> &'static str {
    if active { "filter-btn active" } else { "filter-btn" }
}

#[component]
pub fn GenerationSelector() -> impl IntoView {
    let store = use_app_store();
    let selected = move || store.filter().read().generation().map(str::to_string);

    view! {
        <div class="filter-section">
            <h2 class="filter-title">"Filter by Generation"</h2>
            <div class="filter-buttons">
                <button
                    class=move || button_class(selected().is_none())
                    on:click=move |_| store_set_generation(&store, None)
                >
                    "All Generations"
                </button>
                <For
                    each=move || store.generations().get()
                    key=|generation| generation.name.clone()
                    children=move |generation| {
                        let name = generation.name.clone();
                        let is_active = move || selected().as_deref() == Some(name.as_str());
                        let value = generation.name.clone();
                        view! {
                            <button
                                class=move || button_class(is_active())
                                on:click=move |_| store_set_generation(&store, Some(value.clone()))
                            >
                                {generation.display_name}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
