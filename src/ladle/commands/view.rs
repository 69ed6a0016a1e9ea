use crate::commands::CmdResult;
use crate::error::{LadleError, Result};
use crate::store::{RecipeStore, StoreBackend};

pub fn run<B: StoreBackend, T: AsRef<str>>(
    store: &RecipeStore<B>,
    titles: &[T],
) -> Result<CmdResult> {
    let mut listed = Vec::with_capacity(titles.len());
    for title in titles {
        let recipe = store
            .get(title.as_ref())
            .ok_or_else(|| LadleError::NotFound(title.as_ref().trim().to_string()))?;
        listed.push(recipe.clone());
    }
    Ok(CmdResult::default().with_listed_recipes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::MemoryBackend;

    #[test]
    fn views_by_title_ignoring_case() {
        let mut store = RecipeStore::load(MemoryBackend::new()).unwrap();
        add::run(&mut store, "Toast", &["Bread".into()], "Toast it.").unwrap();

        let result = run(&store, &["toast"]).unwrap();
        assert_eq!(result.listed_recipes[0].title, "Toast");
    }

    #[test]
    fn missing_title_is_not_found() {
        let store = RecipeStore::load(MemoryBackend::new()).unwrap();
        assert!(matches!(
            run(&store, &["Ghost Dish"]).unwrap_err(),
            LadleError::NotFound(_)
        ));
    }
}
