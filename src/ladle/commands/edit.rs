use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecipeUpdate;
use crate::store::{RecipeStore, StoreBackend};

pub fn run<B: StoreBackend>(
    store: &mut RecipeStore<B>,
    title: &str,
    update: &RecipeUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if update.is_empty() {
        result.add_message(CmdMessage::warning("Nothing to update."));
        return Ok(result);
    }

    let updated = store.edit(title, update)?.clone();
    result.add_message(CmdMessage::success(format!(
        "Recipe updated: {}",
        updated.title
    )));
    result.affected_recipes.push(updated);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::LadleError;
    use crate::store::memory::MemoryBackend;

    fn store() -> RecipeStore<MemoryBackend> {
        let mut store = RecipeStore::load(MemoryBackend::new()).unwrap();
        add::run(
            &mut store,
            "Soup",
            &["Water".into(), "Salt".into()],
            "Boil.",
        )
        .unwrap();
        store
    }

    #[test]
    fn empty_update_warns_and_changes_nothing() {
        let mut store = store();
        let result = run(&mut store, "Soup", &RecipeUpdate::default()).unwrap();
        assert!(result.affected_recipes.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn renames_a_recipe() {
        let mut store = store();
        let update = RecipeUpdate {
            title: Some("Broth".into()),
            ..Default::default()
        };
        run(&mut store, "soup", &update).unwrap();

        assert!(store.get("Soup").is_none());
        assert!(store.get("Broth").is_some());
    }

    #[test]
    fn missing_recipe_is_not_found() {
        let mut store = store();
        let update = RecipeUpdate {
            instructions: Some("Simmer.".into()),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut store, "Ghost Dish", &update).unwrap_err(),
            LadleError::NotFound(_)
        ));
    }
}
