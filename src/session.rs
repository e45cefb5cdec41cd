use log::debug;

use crate::model::{IngredientList, Recipe, RecipeSet};

/// Result of [`Session::add_favorite`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    /// A favorite with the same name exists; the first one is kept
    AlreadyPresent,
}

/// Per-user state for one session: the ingredient input, the last
/// suggestion result and the favorites list.
///
/// Favorites are keyed by exact recipe name. Nothing here outlives the
/// process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ingredients_input: String,
    last_result: Option<RecipeSet>,
    favorites: Vec<Recipe>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients_input(&self) -> &str {
        &self.ingredients_input
    }

    pub fn set_ingredients_input(&mut self, input: impl Into<String>) {
        self.ingredients_input = input.into();
    }

    /// Appends recognized ingredients to the input text, comma separated
    pub fn append_ingredients(&mut self, ingredients: &IngredientList) {
        if ingredients.is_empty() {
            return;
        }
        let readable = ingredients.to_input_text();
        let existing = self.ingredients_input.trim();
        self.ingredients_input = if existing.is_empty() {
            readable
        } else {
            format!("{}, {}", existing, readable)
        };
    }

    pub fn last_result(&self) -> Option<&RecipeSet> {
        self.last_result.as_ref()
    }

    pub fn replace_last_result(&mut self, result: RecipeSet) {
        self.last_result = Some(result);
    }

    pub fn favorites(&self) -> &[Recipe] {
        &self.favorites
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.iter().any(|f| f.name == name)
    }

    pub fn add_favorite(&mut self, recipe: &Recipe) -> FavoriteOutcome {
        if self.is_favorite(&recipe.name) {
            return FavoriteOutcome::AlreadyPresent;
        }
        debug!("Adding '{}' to favorites", recipe.name);
        self.favorites.push(recipe.clone());
        FavoriteOutcome::Added
    }

    /// Removes the favorite at `index`, returning it
    pub fn remove_favorite(&mut self, index: usize) -> Option<Recipe> {
        if index < self.favorites.len() {
            Some(self.favorites.remove(index))
        } else {
            None
        }
    }

    pub fn remove_favorite_named(&mut self, name: &str) -> Option<Recipe> {
        let index = self.favorites.iter().position(|f| f.name == name)?;
        self.remove_favorite(index)
    }
}
