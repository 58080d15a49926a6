//! Selection Engine
//!
//! Decides which records a cycle fetches for the current filter, then
//! resolves them with one parallel fan-out. The first failed request
//! fails the whole batch; no partial results are returned.

use std::collections::HashSet;

use futures::future::try_join_all;
use rand::seq::SliceRandom;
use rand::Rng;

use super::client::{CatalogClient, ItemKey};
use super::transport::Transport;
use crate::error::FetchResult;
use crate::filter::{FilterState, Strategy};
use crate::models::{Item, NamedResource};

/// Resolve up to `count` records for `filter`.
///
/// `total_count` bounds random ids and is only consulted with no filter.
pub async fn select_items<T, R>(
    client: &CatalogClient<T>,
    filter: &FilterState,
    count: usize,
    total_count: u32,
    rng: &mut R,
) -> FetchResult<Vec<Item>>
where
    T: Transport,
    R: Rng + ?Sized,
{
    let keys: Vec<ItemKey> = match filter.strategy() {
        Strategy::ByGeneration(generation) => {
            let species = client.list_by_generation(&generation).await?;
            sample(&species, count, rng)
                .into_iter()
                .map(|s| ItemKey::Name(s.name))
                .collect()
        }
        Strategy::ByCategories(categories) => {
            let pool = category_pool(client, &categories).await?;
            sample(&pool, count, rng).into_iter().map(ItemKey::from).collect()
        }
        Strategy::Random => random_ids(total_count, count, rng)
            .into_iter()
            .map(ItemKey::Id)
            .collect(),
    };

    resolve(client, &keys).await
}

/// `select_items` with failures logged and flattened to `None`
pub async fn run_cycle<T, R>(
    client: &CatalogClient<T>,
    filter: &FilterState,
    count: usize,
    total_count: u32,
    rng: &mut R,
) -> Option<Vec<Item>>
where
    T: Transport,
    R: Rng + ?Sized,
{
    match select_items(client, filter, count, total_count, rng).await {
        Ok(items) => {
            log::info!("cycle resolved {} items ({:?})", items.len(), filter.strategy());
            Some(items)
        }
        Err(e) => {
            log::error!("Error fetching items: {}", e);
            None
        }
    }
}

/// Membership lists of every category, concatenated in selection order
/// and deduplicated by name.
pub async fn category_pool<T: Transport>(
    client: &CatalogClient<T>,
    categories: &[String],
) -> FetchResult<Vec<NamedResource>> {
    let lists = try_join_all(categories.iter().map(|c| client.list_by_category(c))).await?;
    Ok(dedup_by_name(lists.into_iter().flatten()))
}

/// First occurrence wins, order preserved
pub fn dedup_by_name(entries: impl IntoIterator<Item = NamedResource>) -> Vec<NamedResource> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.name.clone()))
        .collect()
}

/// Uniform sample of `min(count, pool.len())` entries without replacement
pub fn sample<E: Clone, R: Rng + ?Sized>(pool: &[E], count: usize, rng: &mut R) -> Vec<E> {
    pool.choose_multiple(rng, count).cloned().collect()
}

/// `count` independent ids in `[1, total_count]`, duplicates allowed
pub fn random_ids<R: Rng + ?Sized>(total_count: u32, count: usize, rng: &mut R) -> Vec<u32> {
    let upper = total_count.max(1);
    (0..count).map(|_| rng.gen_range(1..=upper)).collect()
}

async fn resolve<T: Transport>(client: &CatalogClient<T>, keys: &[ItemKey]) -> FetchResult<Vec<Item>> {
    try_join_all(keys.iter().map(|key| client.get_item(key))).await
}
