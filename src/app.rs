//! Pokémon Explorer App
//!
//! Root component: startup metadata, filter-driven reloads, layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::catalog::{CatalogClient, FetchTransport};
use crate::components::{CardGrid, CategorySelector, GenerationSelector};
use crate::config::CatalogConfig;
use crate::context::AppContext;
use crate::display::MergeMode;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::default();
    let store = Store::new(AppState::new(&config));
    let ctx = AppContext::new(CatalogClient::new(FetchTransport, config), store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Startup metadata, fetched once per session
    spawn_local(async move {
        let catalog = ctx.catalog();
        let (categories, generations, count) = futures::join!(
            catalog.list_categories(),
            catalog.list_generations(),
            catalog.collection_count()
        );
        match count {
            Ok(count) => *store.total_count().write() = count,
            Err(e) => log::warn!(
                "Error fetching collection count: {}, keeping {}",
                e,
                store.total_count().get_untracked()
            ),
        }
        log::info!("loaded {} categories, {} generations", categories.len(), generations.len());
        *store.generations().write() = generations;
        *store.categories().write() = categories;
    });

    // Memo so re-selecting the same filter does not refetch
    let filter = Memo::new(move |_| store.filter().get());
    let ready = Memo::new(move |_| !store.categories().read().is_empty());

    // Replace the list whenever the filter changes
    Effect::new(move |_| {
        let filter = filter.get();
        if ready.get() {
            ctx.load(filter, MergeMode::Replace);
        }
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Pokémon Explorer"</h1>
                <p class="app-subtitle">"Discover amazing Pokémon from the PokéAPI"</p>
            </header>

            <section class="filters">
                <GenerationSelector />
                <CategorySelector />
            </section>

            <main class="main-content">
                <CardGrid />
            </main>
        </div>
    }
}
