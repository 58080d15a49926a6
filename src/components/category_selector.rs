//! Category Selector Component
//!
//! Multi-select category toggle buttons. Disabled (but not cleared)
//! while a generation filter is active.

use leptos::prelude::*;

use crate::components::Spinner;
use crate::models::capitalize_first;
use crate::store::{store_clear_categories, store_toggle_category, use_app_store, AppStateStoreFields};

#[component]
pub fn CategorySelector() -> impl IntoView {
    let store = use_app_store();
    let disabled = move || !store.filter().read().categories_enabled();
    let has_selection = move || !store.filter().read().categories().is_empty();
    let loading = move || store.categories().read().is_empty();

    view! {
        <div class="filter-section">
            <div class="filter-header">
                <h2 class="filter-title">"Filter by Type"</h2>
                <div class="filter-actions">
                    <Show when=disabled>
                        <span class="filter-note">"Disabled when filtering by generation"</span>
                    </Show>
                    <Show when=move || has_selection() && !disabled()>
                        <button class="clear-btn" on:click=move |_| store_clear_categories(&store)>
                            "× Clear All"
                        </button>
                    </Show>
                </div>
            </div>

            <div class="filter-buttons">
                <Show
                    when=move || !loading()
                    fallback=|| view! {
                        <div class="filter-loading">
                            <Spinner size="inline" />
                            "Loading types..."
                        </div>
                    }
                >
                    <For
                        each=move || store.categories().get()
                        key=|category| category.clone()
                        children=move |category| {
                            let label = capitalize_first(&category);
                            let for_class = category.clone();
                            let class = move || {
                                if disabled() {
                                    "filter-btn disabled"
                                } else if store.filter().read().is_selected(&for_class) {
                                    "filter-btn active"
                                } else {
                                    "filter-btn"
                                }
                            };
                            view! {
                                <button
                                    class=class
                                    disabled=disabled
                                    on:click=move |_| {
                                        if !disabled() {
                                            store_toggle_category(&store, &category);
                                        }
                                    }
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </Show>
            </div>

            <Show when=has_selection>
                <p class="filter-summary">
                    "Showing Pokémon of type: "
                    {move || {
                        store
                            .filter()
                            .read()
                            .categories()
                            .iter()
                            .map(|c| capitalize_first(c))
                            .collect::<Vec<_>>()
                            .join(", ")
                    }}
                </p>
            </Show>
        </div>
    }
}
