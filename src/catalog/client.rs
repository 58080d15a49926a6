//! Remote Catalog Client
//!
//! Typed wrappers over the catalog service endpoints. Startup metadata
//! (categories, generations) never fails: errors degrade to a fallback.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use super::transport::Transport;
use crate::config::{CatalogConfig, EXCLUDED_CATEGORIES, FALLBACK_CATEGORIES};
use crate::error::{FetchError, FetchResult};
use crate::models::{
    CategoryDetail, Generation, GenerationDetail, Item, NamedResource, RawItem, ResourceList,
};

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(s: &str) -> String {
    utf8_percent_encode(s, PATH_SEGMENT).to_string()
}

/// How to address a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKey {
    Id(u32),
    Name(String),
    /// Resource URL taken verbatim from a listing
    Url(String),
}

impl From<NamedResource> for ItemKey {
    fn from(r: NamedResource) -> Self {
        if r.url.is_empty() {
            ItemKey::Name(r.name)
        } else {
            ItemKey::Url(r.url)
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogClient<T> {
    transport: T,
    config: CatalogConfig,
}

impl<T: Transport> CatalogClient<T> {
    pub fn new(transport: T, config: CatalogConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get<R: DeserializeOwned>(&self, url: &str) -> FetchResult<R> {
        let value = self.transport.get_json(url).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn item_url(&self, key: &ItemKey) -> String {
        match key {
            ItemKey::Id(id) => format!("{}/{}", self.config.pokemon_url(), id),
            ItemKey::Name(name) => format!("{}/{}", self.config.pokemon_url(), segment(name)),
            ItemKey::Url(url) => url.clone(),
        }
    }

    /// Standard category names, or the built-in list when the fetch fails
    pub async fn list_categories(&self) -> Vec<String> {
        let url = format!("{}?limit={}", self.config.type_url(), self.config.category_limit);
        match self.get::<ResourceList>(&url).await {
            Ok(list) => {
                let names: Vec<String> = list
                    .results
                    .into_iter()
                    .map(|r| r.name)
                    .filter(|name| !EXCLUDED_CATEGORIES.contains(&name.as_str()))
                    .collect();
                if names.is_empty() {
                    log::warn!("category listing was empty, using fallback");
                    fallback_categories()
                } else {
                    names
                }
            }
            Err(e) => {
                log::warn!("Error fetching categories: {}", e);
                fallback_categories()
            }
        }
    }

    /// Generations with button labels; empty on failure
    pub async fn list_generations(&self) -> Vec<Generation> {
        let url = format!("{}?limit={}", self.config.generation_url(), self.config.generation_limit);
        match self.get::<ResourceList>(&url).await {
            Ok(list) => list.results.into_iter().map(|r| Generation::from_name(r.name)).collect(),
            Err(e) => {
                log::warn!("Error fetching generations: {}", e);
                Vec::new()
            }
        }
    }

    /// Total record count reported by the root listing
    pub async fn collection_count(&self) -> FetchResult<u32> {
        let url = format!("{}?limit=1", self.config.pokemon_url());
        let list: ResourceList = self.get(&url).await?;
        list.count
            .ok_or_else(|| FetchError::Decode(format!("no count in {}", url)))
    }

    pub async fn get_item(&self, key: &ItemKey) -> FetchResult<Item> {
        let raw: RawItem = self.get(&self.item_url(key)).await?;
        Ok(Item::from(raw))
    }

    pub async fn list_by_category(&self, category: &str) -> FetchResult<Vec<NamedResource>> {
        let url = format!("{}/{}", self.config.type_url(), segment(category));
        let detail: CategoryDetail = self.get(&url).await?;
        Ok(detail.pokemon.into_iter().map(|m| m.pokemon).collect())
    }

    pub async fn list_by_generation(&self, generation: &str) -> FetchResult<Vec<NamedResource>> {
        let url = format!("{}/{}", self.config.generation_url(), segment(generation));
        let detail: GenerationDetail = self.get(&url).await?;
        Ok(detail.pokemon_species)
    }
}

pub fn fallback_categories() -> Vec<String> {
    FALLBACK_CATEGORIES.iter().map(|s| s.to_string()).collect()
}
