//! Ingredient extraction from kitchen photos.

use log::{debug, info};

use crate::error::SuggestError;
use crate::image::ImagePayload;
use crate::model::IngredientList;
use crate::providers::{LlmProvider, VISION_PROMPT};

/// Bullet and numbering punctuation stripped from the start of reply lines
const LINE_PREFIX: &[char] = &['-', '•', '*', '.', ')', ' '];

/// Ask a vision-capable model which ingredients are visible in `image`.
///
/// A reply that names nothing yields an empty list; only a failed call is an
/// error.
pub async fn extract_ingredients(
    provider: &dyn LlmProvider,
    image: &[u8],
) -> Result<IngredientList, SuggestError> {
    if image.is_empty() {
        return Err(SuggestError::InvalidRequest("image is empty".to_string()));
    }

    let payload = ImagePayload::from_bytes(image);
    debug!(
        "Requesting ingredient list from {}",
        provider.provider_name()
    );
    let raw = provider
        .complete_with_image(VISION_PROMPT, &payload)
        .await
        .map_err(|e| SuggestError::ExternalService(e.to_string()))?;

    let ingredients = parse_ingredient_lines(&raw);
    info!("Recognized {} ingredients", ingredients.len());
    Ok(ingredients)
}

/// Turns a one-ingredient-per-line reply into a clean list.
///
/// Each line loses leading bullets, numbering and whitespace, is lower-cased,
/// and is kept only the first time it appears.
pub fn parse_ingredient_lines(raw: &str) -> IngredientList {
    raw.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| c.is_ascii_digit() || LINE_PREFIX.contains(&c))
                .trim()
        })
        .collect()
}
