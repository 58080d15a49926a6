//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::CatalogConfig;
use crate::display::{CycleTicket, DisplayList, MergeMode};
use crate::filter::FilterState;
use crate::models::{Generation, Item};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Category names; empty until startup metadata arrives
    pub categories: Vec<String>,
    pub generations: Vec<Generation>,
    /// Upper bound for random ids, fetched once at startup
    pub total_count: u32,
    pub filter: FilterState,
    /// Cards on screen plus in-flight cycle bookkeeping
    pub display: DisplayList,
}

impl AppState {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            total_count: config.default_total_count,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Register a selection cycle on the displayed list
pub fn store_begin_cycle(store: &AppStore, mode: MergeMode) -> CycleTicket {
    store.display().write().begin(mode)
}

/// Merge a settled cycle; `None` means it failed
pub fn store_finish_cycle(store: &AppStore, ticket: CycleTicket, outcome: Option<Vec<Item>>) {
    let merged = store.display().write().finish(ticket, outcome);
    log::debug!("cycle #{} settled, merged={}", ticket.seq, merged);
}

pub fn store_toggle_category(store: &AppStore, category: &str) {
    store.filter().write().toggle_category(category);
}

pub fn store_clear_categories(store: &AppStore) {
    store.filter().write().clear_categories();
}

pub fn store_set_generation(store: &AppStore, generation: Option<String>) {
    store.filter().write().set_generation(generation);
}
