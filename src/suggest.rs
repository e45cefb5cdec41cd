//! Recipe generation: prompt rendering, one model call, reply parsing.

use log::{debug, info};

use crate::constraints::{RecipeRequest, NO_CONSTRAINTS};
use crate::error::SuggestError;
use crate::model::RecipeSet;
use crate::providers::{render_recipe_prompt, LlmProvider};
use crate::schema::{parse_reply, RecipeDefaults};

/// Ask the model for recipes using a caller-assembled constraint string.
///
/// Blank `extra_constraints` are sent as [`NO_CONSTRAINTS`]. Recipes that omit
/// `servings` get the requested value. There is no retry: a failed call is
/// returned as [`SuggestError::ExternalService`].
pub async fn generate_recipes(
    provider: &dyn LlmProvider,
    ingredients: &str,
    servings: u32,
    extra_constraints: &str,
) -> Result<RecipeSet, SuggestError> {
    run(
        provider,
        ingredients,
        extra_constraints,
        &RecipeDefaults::new(servings),
    )
    .await
}

/// Ask the model for recipes matching typed filters. Missing `meal_type` and
/// `diet` fields default to the active filters.
pub async fn generate(
    provider: &dyn LlmProvider,
    request: &RecipeRequest,
) -> Result<RecipeSet, SuggestError> {
    run(
        provider,
        &request.ingredients,
        &request.filters.constraint_text(),
        &request.defaults(),
    )
    .await
}

async fn run(
    provider: &dyn LlmProvider,
    ingredients: &str,
    extra_constraints: &str,
    defaults: &RecipeDefaults,
) -> Result<RecipeSet, SuggestError> {
    if ingredients.trim().is_empty() {
        return Err(SuggestError::InvalidRequest(
            "at least one ingredient is required".to_string(),
        ));
    }
    if defaults.servings == 0 {
        return Err(SuggestError::InvalidRequest(
            "servings must be at least 1".to_string(),
        ));
    }

    let constraints = if extra_constraints.trim().is_empty() {
        NO_CONSTRAINTS
    } else {
        extra_constraints
    };
    let prompt = render_recipe_prompt(ingredients, constraints, defaults.servings);

    debug!(
        "Requesting recipes from {} for {} servings",
        provider.provider_name(),
        defaults.servings
    );
    let raw = provider
        .complete(&prompt)
        .await
        .map_err(|e| SuggestError::ExternalService(e.to_string()))?;

    if raw.trim().is_empty() {
        return Err(SuggestError::ExternalService(format!(
            "{} returned an empty reply",
            provider.provider_name()
        )));
    }

    let recipes = parse_reply(&raw, defaults).map_err(|e| SuggestError::malformed(e, &raw))?;
    info!(
        "Received {} recipes and {} shopping list items",
        recipes.len(),
        recipes.shopping_list().len()
    );
    Ok(recipes)
}
