use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{RecipeStore, StoreBackend};

pub fn run<B: StoreBackend>(store: &RecipeStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_recipes(store.list_all().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::MemoryBackend;

    #[test]
    fn lists_everything_in_insertion_order() {
        let mut store = RecipeStore::load(MemoryBackend::new()).unwrap();
        add::run(&mut store, "Zebra Cake", &["Cocoa".into()], "Bake.").unwrap();
        add::run(&mut store, "Apple Pie", &["Apples".into()], "Bake.").unwrap();

        let result = run(&store).unwrap();
        let titles: Vec<_> = result
            .listed_recipes
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Zebra Cake", "Apple Pie"]);
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let store = RecipeStore::load(MemoryBackend::new()).unwrap();
        assert!(run(&store).unwrap().listed_recipes.is_empty());
    }
}
