//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for every
//! ladle operation, regardless of the UI driving it. It dispatches to the
//! command modules and returns structured `Result<CmdResult>` values; it
//! performs no I/O and no presentation.
//!
//! `RecipeApi<B: StoreBackend>` is generic over the storage backend:
//! `FileBackend` in production, `MemoryBackend` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::RecipeUpdate;
use crate::store::{RecipeStore, StoreBackend};
use std::path::PathBuf;

/// The main API facade for ladle operations.
///
/// All UI clients should interact through this API; the store behind it is
/// loaded once at construction and persisted by the mutating operations.
pub struct RecipeApi<B: StoreBackend> {
    store: RecipeStore<B>,
    catalog_dir: PathBuf,
}

impl<B: StoreBackend> RecipeApi<B> {
    /// Open the catalog: loads the collection through the backend.
    pub fn open(backend: B, catalog_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: RecipeStore::load(backend)?,
            catalog_dir,
        })
    }

    pub fn add_recipe(
        &mut self,
        title: &str,
        ingredients: &[String],
        instructions: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, ingredients, instructions)
    }

    pub fn list_recipes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_recipes<T: AsRef<str>>(&self, titles: &[T]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, titles)
    }

    pub fn search_recipes(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn edit_recipe(&mut self, title: &str, update: &RecipeUpdate) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, title, update)
    }

    pub fn delete_recipes<T: AsRef<str>>(&mut self, titles: &[T]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, titles)
    }

    pub fn catalog_path(&self) -> Result<commands::CmdResult> {
        let mut result = commands::CmdResult::default();
        if let Some(path) = self.store.backing_path() {
            result = result.with_catalog_path(path.to_path_buf());
        }
        Ok(result)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.catalog_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBackend;

    fn api() -> RecipeApi<MemoryBackend> {
        RecipeApi::open(MemoryBackend::new(), PathBuf::from("data")).unwrap()
    }

    #[test]
    fn dispatches_add_then_list() {
        let mut api = api();
        api.add_recipe("Tea", &["Water".into(), "Tea leaves".into()], "Steep.")
            .unwrap();

        let result = api.list_recipes().unwrap();
        assert_eq!(result.listed_recipes.len(), 1);
        assert_eq!(result.listed_recipes[0].title, "Tea");
    }

    #[test]
    fn dispatches_edit_and_delete_by_title() {
        let mut api = api();
        api.add_recipe("Tea", &["Water".into()], "Steep.").unwrap();

        let update = RecipeUpdate {
            title: Some("Green Tea".into()),
            ..Default::default()
        };
        api.edit_recipe("tea", &update).unwrap();
        api.delete_recipes(&["green tea"]).unwrap();

        assert!(api.list_recipes().unwrap().listed_recipes.is_empty());
    }

    #[test]
    fn memory_backend_has_no_catalog_path() {
        let api = api();
        assert!(api.catalog_path().unwrap().catalog_path.is_none());
    }
}
