//! Item Card Component
//!
//! One creature card: artwork, name, category badges, height and weight.

use leptos::prelude::*;

use crate::models::{capitalize_first, Item};

/// Badge colours keyed by category, blue and gray tones only
pub const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("normal", "#6b7280"),
    ("fire", "#3b82f6"),
    ("water", "#2563eb"),
    ("electric", "#4b5563"),
    ("grass", "#60a5fa"),
    ("ice", "#9ca3af"),
    ("fighting", "#1d4ed8"),
    ("poison", "#374151"),
    ("ground", "#93c5fd"),
    ("flying", "#d1d5db"),
    ("psychic", "#1e40af"),
    ("bug", "#1f2937"),
    ("rock", "#bfdbfe"),
    ("ghost", "#e5e7eb"),
    ("dragon", "#1e3a8a"),
    ("dark", "#111827"),
    ("steel", "#6b7280"),
    ("fairy", "#93c5fd"),
];

pub const DEFAULT_BADGE_COLOR: &str = "#6b7280";

pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_BADGE_COLOR)
}

/// `(label, colour)` per badge; a record without tags gets one "Unknown Type" badge
pub fn badges(item: &Item) -> Vec<(String, &'static str)> {
    if item.types.is_empty() {
        return vec![("Unknown Type".to_string(), DEFAULT_BADGE_COLOR)];
    }
    item.types
        .iter()
        .map(|t| (capitalize_first(t), category_color(t)))
        .collect()
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let name = item.display_name();
    let alt = item.name.clone().unwrap_or_else(|| "Unknown Pokémon".to_string());

    view! {
        <div class="card">
            <div class="card-image">
                <img src=item.image_src().to_string() alt=alt crossorigin="anonymous" />
            </div>

            <h3 class="card-name">{name}</h3>

            <div class="card-badges">
                {badges(&item).into_iter().map(|(label, color)| view! {
                    <span class="badge" style=format!("background-color: {};", color)>{label}</span>
                }).collect_view()}
            </div>

            <div class="card-stats">
                <div>
                    <p class="stat-label">"Height"</p>
                    <p class="stat-value">{item.height_label()}</p>
                </div>
                <div>
                    <p class="stat-label">"Weight"</p>
                    <p class="stat-value">{item.weight_label()}</p>
                </div>
            </div>
        </div>
    }
}
