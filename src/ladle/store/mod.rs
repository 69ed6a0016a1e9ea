//! # Storage Layer
//!
//! The catalog lives in memory as an ordered `Vec<Recipe>` owned by
//! [`RecipeStore`]; persistence is abstracted behind the [`StoreBackend`]
//! trait so the same store logic runs against the filesystem in production
//! and against memory in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production backend. The whole collection is one
//!   JSON array in a single file; writes go to a temp file in the same
//!   directory and are renamed into place.
//! - [`memory::MemoryBackend`]: in-memory backend for fast, isolated tests.
//!
//! ## Loaded-by-construction
//!
//! A `RecipeStore` can only be obtained through [`RecipeStore::load`], so
//! every live store is in the loaded state; there is no "operate before
//! load" failure mode to check for at runtime.
//!
//! ## Failure atomicity
//!
//! Every mutating operation validates first, then mutates the in-memory
//! collection, then persists. If persisting fails the in-memory change is
//! rolled back, so a failed operation leaves both the collection and the
//! backing file as they were.

use crate::error::{LadleError, Result};
use crate::model::{normalize_title, Recipe, RecipeUpdate};
use std::collections::HashSet;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Raw persistence for a whole catalog. Implementations read and write the
/// collection as a unit; they do not interpret it.
pub trait StoreBackend {
    /// Read the persisted collection. Absent or empty backing data is an
    /// empty collection, not an error.
    fn load_recipes(&self) -> Result<Vec<Recipe>>;

    /// Persist the collection, replacing whatever was stored before.
    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()>;

    /// Path of the backing file, if the backend has one.
    fn path(&self) -> Option<&Path>;
}

/// The catalog: an ordered collection of recipes plus its backend.
#[derive(Debug)]
pub struct RecipeStore<B: StoreBackend> {
    backend: B,
    recipes: Vec<Recipe>,
}

impl<B: StoreBackend> RecipeStore<B> {
    /// Load the catalog from the backend. Malformed backing data surfaces
    /// as [`LadleError::CorruptData`]; records that parse but break the
    /// catalog rules (empty fields, duplicate normalized titles, say from
    /// a hand-edited file) surface as [`LadleError::InvalidData`]. The
    /// store never discards or overwrites the offending data.
    pub fn load(backend: B) -> Result<Self> {
        let recipes = backend.load_recipes()?;
        verify_catalog(&recipes)?;
        Ok(Self { backend, recipes })
    }

    /// Persist the current collection.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save_recipes(&self.recipes)
    }

    /// Validate and append a recipe, then persist.
    pub fn add(&mut self, recipe: Recipe) -> Result<&Recipe> {
        recipe.validate()?;
        let normalized = recipe.normalized_title();
        if self.find_index(&normalized).is_some() {
            return Err(LadleError::DuplicateTitle(recipe.title));
        }

        self.recipes.push(recipe);
        if let Err(e) = self.save() {
            self.recipes.pop();
            return Err(e);
        }
        let index = self.recipes.len() - 1;
        Ok(&self.recipes[index])
    }

    /// Every recipe, in insertion order.
    pub fn list_all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Case-insensitive substring search over titles and ingredients,
    /// preserving collection order.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let query = query.trim().to_lowercase();
        self.recipes.iter().filter(|r| r.matches(&query)).collect()
    }

    /// Look up a recipe by normalized title.
    pub fn get(&self, title: &str) -> Option<&Recipe> {
        let normalized = normalize_title(title);
        self.find_index(&normalized).map(|i| &self.recipes[i])
    }

    /// Apply the provided fields of `update` to the recipe with the given
    /// title, re-validating the merged record, then persist.
    pub fn edit(&mut self, title: &str, update: &RecipeUpdate) -> Result<&Recipe> {
        let normalized = normalize_title(title);
        let index = self
            .find_index(&normalized)
            .ok_or_else(|| LadleError::NotFound(title.trim().to_string()))?;

        let mut updated = self.recipes[index].clone();
        if let Some(new_title) = &update.title {
            updated.title = new_title.trim().to_string();
        }
        if let Some(ingredients) = &update.ingredients {
            updated.ingredients = ingredients
                .iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect();
        }
        if let Some(instructions) = &update.instructions {
            updated.instructions = instructions.trim().to_string();
        }
        updated.validate()?;

        // A renamed recipe must not collide with any *other* recipe.
        let new_normalized = updated.normalized_title();
        if new_normalized != normalized && self.find_index(&new_normalized).is_some() {
            return Err(LadleError::DuplicateTitle(updated.title));
        }

        let previous = std::mem::replace(&mut self.recipes[index], updated);
        if let Err(e) = self.save() {
            self.recipes[index] = previous;
            return Err(e);
        }
        Ok(&self.recipes[index])
    }

    /// Remove the recipe with the given title, then persist. Returns the
    /// removed recipe.
    pub fn delete(&mut self, title: &str) -> Result<Recipe> {
        let mut removed = self.delete_many(&[title])?;
        Ok(removed.remove(0))
    }

    /// Remove several recipes as one operation: either every title
    /// resolves and the catalog persists once, or nothing changes.
    pub fn delete_many<T: AsRef<str>>(&mut self, titles: &[T]) -> Result<Vec<Recipe>> {
        let mut removed: Vec<(usize, Recipe)> = Vec::with_capacity(titles.len());

        for title in titles {
            let normalized = normalize_title(title.as_ref());
            match self.find_index(&normalized) {
                Some(index) => removed.push((index, self.recipes.remove(index))),
                None => {
                    self.restore(removed);
                    return Err(LadleError::NotFound(title.as_ref().trim().to_string()));
                }
            }
        }

        if let Err(e) = self.save() {
            self.restore(removed);
            return Err(e);
        }
        Ok(removed.into_iter().map(|(_, recipe)| recipe).collect())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Path of the backing file, if the backend has one.
    pub fn backing_path(&self) -> Option<&Path> {
        self.backend.path()
    }

    fn find_index(&self, normalized: &str) -> Option<usize> {
        self.recipes
            .iter()
            .position(|r| r.normalized_title() == normalized)
    }

    // Undoes a run of `remove` calls: re-inserting in reverse order at the
    // recorded indices restores the original ordering exactly.
    fn restore(&mut self, removed: Vec<(usize, Recipe)>) {
        for (index, recipe) in removed.into_iter().rev() {
            self.recipes.insert(index, recipe);
        }
    }
}

/// Loaded records must satisfy the same rules `add` enforces, including
/// normalized-title uniqueness across the whole collection.
fn verify_catalog(recipes: &[Recipe]) -> Result<()> {
    let mut seen = HashSet::new();
    for recipe in recipes {
        recipe
            .validate()
            .map_err(|e| LadleError::InvalidData(format!("'{}': {}", recipe.title, e)))?;
        if !seen.insert(recipe.normalized_title()) {
            return Err(LadleError::InvalidData(format!(
                "duplicate title '{}'",
                recipe.title
            )));
        }
    }
    Ok(())
}
