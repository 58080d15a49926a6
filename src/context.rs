//! Application Context
//!
//! Shared catalog handle and cycle launcher provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{run_cycle, WebCatalog};
use crate::display::MergeMode;
use crate::filter::FilterState;
use crate::store::{store_begin_cycle, store_finish_cycle, AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    catalog: StoredValue<WebCatalog>,
    store: AppStore,
}

impl AppContext {
    pub fn new(catalog: WebCatalog, store: AppStore) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            store,
        }
    }

    pub fn catalog(&self) -> WebCatalog {
        self.catalog.get_value()
    }

    pub fn page_size(&self) -> usize {
        self.catalog.with_value(|c| c.config().page_size)
    }

    /// Start a selection cycle for `filter` and merge its result when it settles.
    ///
    /// Cycles are never cancelled; a later `Replace` makes earlier results stale.
    pub fn load(&self, filter: FilterState, mode: MergeMode) {
        let store = self.store;
        let catalog = self.catalog();
        let count = self.page_size();
        let total_count = store.total_count().get_untracked();
        let ticket = store_begin_cycle(&store, mode);
        log::info!("cycle #{} {:?}: {:?}", ticket.seq, mode, filter.strategy());

        spawn_local(async move {
            let mut rng = rand::thread_rng();
            let outcome = run_cycle(&catalog, &filter, count, total_count, &mut rng).await;
            store_finish_cycle(&store, ticket, outcome);
        });
    }

    /// "Add more" with the current filter
    pub fn load_more(&self) {
        let filter = self.store.filter().get_untracked();
        self.load(filter, MergeMode::Append);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
