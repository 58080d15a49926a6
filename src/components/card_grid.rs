//! Card Grid Component
//!
//! Displayed list as a grid with the "Add More Cards" control.

use leptos::prelude::*;

use crate::components::{ItemCard, Spinner};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CardGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let loading = move || store.display().read().is_loading();
    let page_spinner = move || store.display().read().shows_page_spinner();

    view! {
        <Show
            when=move || !page_spinner()
            fallback=|| view! {
                <div class="page-loading">
                    <Spinner size="page" />
                </div>
            }
        >
            <div class="card-grid">
                <For
                    each=move || store.display().read().keyed()
                    key=|(index, item)| (*index, item.id)
                    children=|(_, item)| view! { <ItemCard item=item /> }
                />
            </div>

            <div class="add-more">
                <button
                    class="add-more-btn"
                    disabled=loading
                    on:click=move |_| ctx.load_more()
                >
                    {move || if loading() {
                        view! { <Spinner size="button" /> }.into_any()
                    } else {
                        view! { <span class="add-more-icon">"+"</span> }.into_any()
                    }}
                    "Add More Cards"
                </button>
            </div>
        </Show>
    }
}
