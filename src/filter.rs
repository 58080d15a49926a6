//! Filter State
//!
//! Selected categories and generation. A selected generation takes
//! precedence; categories stay stored but are not used for fetching.

/// Which selection strategy a filter state resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    ByGeneration(String),
    ByCategories(Vec<String>),
    Random,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Selection order, no duplicates
    categories: Vec<String>,
    generation: Option<String>,
}

impl FilterState {
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn generation(&self) -> Option<&str> {
        self.generation.as_deref()
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Category controls are inert while a generation is active
    pub fn categories_enabled(&self) -> bool {
        self.generation.is_none()
    }

    pub fn set_categories(&mut self, categories: Vec<String>) {
        let mut deduped: Vec<String> = Vec::with_capacity(categories.len());
        for c in categories {
            if !deduped.contains(&c) {
                deduped.push(c);
            }
        }
        self.categories = deduped;
    }

    pub fn toggle_category(&mut self, category: &str) {
        if self.is_selected(category) {
            self.categories.retain(|c| c != category);
        } else {
            self.categories.push(category.to_string());
        }
    }

    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    /// `None` or an empty name clears the generation
    pub fn set_generation(&mut self, generation: Option<String>) {
        self.generation = generation.filter(|g| !g.is_empty());
    }

    pub fn strategy(&self) -> Strategy {
        if let Some(generation) = &self.generation {
            Strategy::ByGeneration(generation.clone())
        } else if !self.categories.is_empty() {
            Strategy::ByCategories(self.categories.clone())
        } else {
            Strategy::Random
        }
    }
}
