//! Catalog Configuration
//!
//! Compile-time defaults for the remote catalog and paging.

/// Base URL of the public catalog service
pub const API_BASE: &str = "https://pokeapi.co/api/v2";

/// Categories the service lists that are not real creature types
pub const EXCLUDED_CATEGORIES: &[&str] = &["unknown", "shadow"];

/// Used when the category listing cannot be fetched
pub const FALLBACK_CATEGORIES: &[&str] = &[
    "normal", "fire", "water", "electric", "grass", "ice",
    "fighting", "poison", "ground", "flying", "psychic", "bug",
    "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub api_base: String,
    /// Cards fetched per cycle, both initial load and "add more"
    pub page_size: usize,
    /// Collection size assumed until the real count arrives
    pub default_total_count: u32,
    pub category_limit: u32,
    pub generation_limit: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            page_size: 6,
            default_total_count: 1010,
            category_limit: 25,
            generation_limit: 10,
        }
    }
}

impl CatalogConfig {
    pub fn pokemon_url(&self) -> String {
        format!("{}/pokemon", self.api_base)
    }

    pub fn type_url(&self) -> String {
        format!("{}/type", self.api_base)
    }

    pub fn generation_url(&self) -> String {
        format!("{}/generation", self.api_base)
    }
}
