use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecipeStore, StoreBackend};

pub fn run<B: StoreBackend>(store: &RecipeStore<B>, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    let mut result = CmdResult::default();

    // An empty term would substring-match every recipe; treat it as a
    // mistake rather than a list-all.
    if term.is_empty() {
        result.add_message(CmdMessage::warning("Search term cannot be empty."));
        return Ok(result);
    }

    let matches: Vec<_> = store.search(term).into_iter().cloned().collect();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No recipes matching '{}'.", term)));
    }
    Ok(result.with_listed_recipes(matches))
}
