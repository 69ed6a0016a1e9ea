use crate::error::{LadleError, Result};
use serde::{Deserialize, Serialize};

/// Trimmed, case-folded form of a title. All uniqueness checks and
/// lookups go through this.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// A single recipe. Titles are unique per catalog by normalized form;
/// the persisted shape is exactly these three keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl Recipe {
    /// Build a recipe from raw user input, trimming every field.
    /// Blank ingredient entries are dropped rather than rejected here;
    /// `validate` catches a list that ends up empty.
    pub fn new(title: &str, ingredients: &[String], instructions: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            ingredients: ingredients
                .iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
            instructions: instructions.trim().to_string(),
        }
    }

    pub fn normalized_title(&self) -> String {
        normalize_title(&self.title)
    }

    /// Check the non-empty rules. Runs on add and after merging an edit.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(LadleError::Validation("title cannot be empty".into()));
        }
        if self.ingredients.is_empty() {
            return Err(LadleError::Validation(
                "a recipe needs at least one ingredient".into(),
            ));
        }
        if self.ingredients.iter().any(|i| i.trim().is_empty()) {
            return Err(LadleError::Validation(
                "ingredients cannot be blank".into(),
            ));
        }
        if self.instructions.trim().is_empty() {
            return Err(LadleError::Validation(
                "instructions cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Case-insensitive substring match against the title or any single
    /// ingredient. `query` must already be lowercased.
    pub fn matches(&self, query: &str) -> bool {
        if self.title.to_lowercase().contains(query) {
            return true;
        }
        self.ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(query))
    }
}

/// Partial update for an edit: only the provided fields are applied.
#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
}

impl RecipeUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.ingredients.is_none() && self.instructions.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe::new(
            "Pancakes",
            &["Flour".into(), "Eggs".into(), "Milk".into()],
            "Mix.\nFry.",
        )
    }

    #[test]
    fn normalizes_title_by_trimming_and_case_folding() {
        assert_eq!(normalize_title("  Pancakes "), "pancakes");
        assert_eq!(normalize_title("PANCAKES"), "pancakes");
    }

    #[test]
    fn new_trims_fields_and_drops_blank_ingredients() {
        let r = Recipe::new(
            "  Soup  ",
            &[" Water ".into(), "   ".into(), "Salt".into()],
            "  Boil.  ",
        );
        assert_eq!(r.title, "Soup");
        assert_eq!(r.ingredients, vec!["Water", "Salt"]);
        assert_eq!(r.instructions, "Boil.");
    }

    #[test]
    fn validate_accepts_a_complete_recipe() {
        assert!(recipe().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let mut r = recipe();
        r.title = String::new();
        assert!(matches!(r.validate(), Err(LadleError::Validation(_))));

        let mut r = recipe();
        r.ingredients.clear();
        assert!(matches!(r.validate(), Err(LadleError::Validation(_))));

        let mut r = recipe();
        r.instructions = "   ".into();
        assert!(matches!(r.validate(), Err(LadleError::Validation(_))));
    }

    #[test]
    fn validate_rejects_blank_ingredient_entries() {
        // A loaded file can contain blanks that `new` would have dropped.
        let r = Recipe {
            title: "Toast".into(),
            ingredients: vec!["Bread".into(), " ".into()],
            instructions: "Toast it.".into(),
        };
        assert!(matches!(r.validate(), Err(LadleError::Validation(_))));
    }

    #[test]
    fn matches_title_and_ingredients_case_insensitively() {
        let r = recipe();
        assert!(r.matches("pan"));
        assert!(r.matches("egg"));
        assert!(!r.matches("sugar"));
    }

    #[test]
    fn serializes_to_the_three_key_shape() {
        let json = serde_json::to_value(recipe()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("title"));
        assert!(obj.contains_key("ingredients"));
        assert!(obj.contains_key("instructions"));
    }

    #[test]
    fn rejects_records_with_unknown_keys() {
        let raw = r#"{"title": "X", "ingredients": ["Y"], "instructions": "Z", "rating": 5}"#;
        assert!(serde_json::from_str::<Recipe>(raw).is_err());
    }
}
