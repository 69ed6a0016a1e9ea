use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Recipe;
use crate::store::{RecipeStore, StoreBackend};

pub fn run<B: StoreBackend>(
    store: &mut RecipeStore<B>,
    title: &str,
    ingredients: &[String],
    instructions: &str,
) -> Result<CmdResult> {
    let added = store.add(Recipe::new(title, ingredients, instructions))?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe added: {}",
        added.title
    )));
    result.affected_recipes.push(added);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LadleError;
    use crate::store::memory::MemoryBackend;

    fn store() -> RecipeStore<MemoryBackend> {
        RecipeStore::load(MemoryBackend::new()).unwrap()
    }

    #[test]
    fn adds_and_reports_success() {
        let mut store = store();
        let result = run(
            &mut store,
            "Pancakes",
            &["Flour".into(), "Eggs".into()],
            "Mix and fry.",
        )
        .unwrap();

        assert_eq!(result.affected_recipes.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejects_duplicate_title_across_case() {
        let mut store = store();
        run(&mut store, "Pancakes", &["Flour".into()], "Fry.").unwrap();

        let err = run(&mut store, "  PANCAKES ", &["Flour".into()], "Fry.").unwrap_err();
        assert!(matches!(err, LadleError::DuplicateTitle(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        let mut store = store();
        assert!(run(&mut store, "", &["Flour".into()], "Fry.").is_err());
        assert!(run(&mut store, "Pancakes", &[], "Fry.").is_err());
        assert!(run(&mut store, "Pancakes", &["Flour".into()], "  ").is_err());
        assert!(store.is_empty());
    }
}
