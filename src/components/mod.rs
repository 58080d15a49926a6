//! UI Components
//!
//! Reusable Leptos components.

mod spinner;
mod generation_selector;
mod category_selector;
mod item_card;
mod card_grid;

pub use spinner::Spinner;
pub use generation_selector::GenerationSelector;
pub use category_selector::CategorySelector;
pub use item_card::ItemCard;
pub use card_grid::CardGrid;
