use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecipeStore, StoreBackend};

pub fn run<B: StoreBackend, T: AsRef<str>>(
    store: &mut RecipeStore<B>,
    titles: &[T],
) -> Result<CmdResult> {
    // One batch: a single missing title fails the whole command before
    // anything is persisted.
    let removed = store.delete_many(titles)?;

    let mut result = CmdResult::default();
    for recipe in removed {
        result.add_message(CmdMessage::success(format!(
            "Recipe deleted: {}",
            recipe.title
        )));
        result.affected_recipes.push(recipe);
    }
    Ok(result)
}
