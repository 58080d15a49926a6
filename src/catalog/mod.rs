//! Catalog Layer
//!
//! - transport: HTTP seam (browser fetch)
//! - client: typed endpoint wrappers with startup fallbacks
//! - selection: per-filter record selection and parallel resolution

mod client;
mod selection;
mod transport;
mod tests;

pub use client::CatalogClient;
pub use selection::run_cycle;
pub use transport::{FetchTransport, Transport};

#[cfg(test)]
pub use client::{fallback_categories, ItemKey};
#[cfg(test)]
pub use selection::{category_pool, dedup_by_name, random_ids, select_items};

/// Client used by the running app
pub type WebCatalog = CatalogClient<FetchTransport>;
