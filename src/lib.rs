pub mod builder;
pub mod config;
pub mod constraints;
pub mod error;
pub mod image;
pub mod model;
pub mod normalize;
pub mod providers;
pub mod schema;
pub mod session;
pub mod suggest;
pub mod text;
pub mod vision;

// Re-export commonly used types
pub use builder::{Provider, RecipeAssistant, RecipeAssistantBuilder};
pub use config::AiConfig;
pub use constraints::{Diet, MealType, RecipeFilters, RecipeRequest, NO_CONSTRAINTS};
pub use error::SuggestError;
pub use model::{IngredientList, Recipe, RecipeSet};
pub use normalize::normalize;
pub use schema::{parse_reply, validate, RecipeDefaults, SchemaError};
pub use session::{FavoriteOutcome, Session};
pub use vision::parse_ingredient_lines;

/// Suggest recipes with the provider configured in `mutfak.toml` or the
/// environment.
///
/// # Example
/// ```no_run
/// use mutfak_bilgini::{suggest_recipes, MealType, RecipeFilters, RecipeRequest};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = RecipeRequest::new("domates, soğan, yumurta", 2).with_filters(RecipeFilters {
///     meal_type: MealType::Breakfast,
///     ..Default::default()
/// });
/// let recipes = suggest_recipes(&request).await?;
/// println!("{} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
pub async fn suggest_recipes(request: &RecipeRequest) -> Result<RecipeSet, SuggestError> {
    RecipeAssistant::builder().build()?.suggest(request).await
}

/// Recognize ingredients in a photo with the configured provider.
pub async fn ingredients_from_image(image: &[u8]) -> Result<IngredientList, SuggestError> {
    RecipeAssistant::builder()
        .build()?
        .extract_ingredients(image)
        .await
}
