use super::StoreBackend;
use crate::error::Result;
use crate::model::Recipe;
use std::path::Path;

/// In-memory backend for testing and development.
/// "Persists" only for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    saved: Vec<Recipe>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with pre-existing recipes, as if a previous
    /// session had saved them.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self { saved: recipes }
    }
}

impl StoreBackend for MemoryBackend {
    fn load_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.saved.clone())
    }

    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        self.saved = recipes.to_vec();
        Ok(())
    }

    fn path(&self) -> Option<&Path> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecipeStore;

    #[test]
    fn seeded_recipes_are_visible_after_load() {
        let seed = vec![Recipe::new(
            "Tea",
            &["Water".to_string(), "Tea leaves".to_string()],
            "Steep.",
        )];
        let store = RecipeStore::load(MemoryBackend::with_recipes(seed)).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get("tea").is_some());
    }
}
