use serde::{Deserialize, Serialize};

use crate::text::fold_case;

/// Name used when the model leaves a recipe unnamed
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

/// One suggested dish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub servings: u32,
    /// Cooking time in minutes, `None` when the model did not give one
    pub time_minutes: Option<u32>,
    pub difficulty: String,
    pub meal_type: String,
    pub diet: String,
    /// Ingredients from the user's list that the recipe uses
    pub ingredients_have: Vec<String>,
    /// Ingredients the user still has to buy
    pub ingredients_missing: Vec<String>,
    pub steps: Vec<String>,
}

/// Result of one recipe generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecipeSetFields")]
pub struct RecipeSet {
    recipes: Vec<Recipe>,
    shopping_list: Vec<String>,
}

/// Wire shape of a [`RecipeSet`]; deserialization goes through
/// [`RecipeSet::new`] so the shopping list is cleaned the same way.
#[derive(Deserialize)]
struct RecipeSetFields {
    #[serde(default)]
    recipes: Vec<Recipe>,
    #[serde(default)]
    shopping_list: Vec<String>,
}

impl From<RecipeSetFields> for RecipeSet {
    fn from(fields: RecipeSetFields) -> Self {
        RecipeSet::new(fields.recipes, fields.shopping_list)
    }
}

impl RecipeSet {
    pub fn new(recipes: Vec<Recipe>, shopping_list: impl IntoIterator<Item = String>) -> Self {
        let mut set = RecipeSet {
            recipes,
            shopping_list: Vec::new(),
        };
        for item in shopping_list {
            set.add_shopping_item(item);
        }
        set
    }

    fn add_shopping_item(&mut self, item: String) {
        let item = item.trim();
        if item.is_empty() {
            return;
        }
        let key = fold_case(item);
        if !self.shopping_list.iter().any(|i| fold_case(i) == key) {
            self.shopping_list.push(item.to_string());
        }
    }

    /// Recipes in the order the model returned them
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Items to buy, de-duplicated case-insensitively
    pub fn shopping_list(&self) -> &[String] {
        &self.shopping_list
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the model suggested no recipes at all
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }
}

impl<'a> IntoIterator for &'a RecipeSet {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// Lower-cased ingredient names in first-seen order, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` after trimming and lower-casing it. Returns false when the
    /// entry was blank or already present.
    pub fn push(&mut self, name: &str) -> bool {
        let name = fold_case(name.trim());
        if name.is_empty() || self.0.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Comma separated form used to fill the ingredient input
    pub fn to_input_text(&self) -> String {
        self.0.join(", ")
    }
}

impl<'a> FromIterator<&'a str> for IngredientList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = IngredientList::new();
        for name in iter {
            list.push(name);
        }
        list
    }
}

impl From<Vec<String>> for IngredientList {
    fn from(names: Vec<String>) -> Self {
        names.iter().map(String::as_str).collect()
    }
}

impl From<IngredientList> for Vec<String> {
    fn from(list: IngredientList) -> Self {
        list.0
    }
}
