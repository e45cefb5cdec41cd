/// Template for recipe suggestions.
///
/// Loaded from `recipe_prompt.txt` at compile time. Holds the
/// `{ingredients}`, `{extra_constraints}` and `{servings}` placeholders; the
/// other braces are the literal JSON schema shown to the model.
pub const RECIPE_PROMPT_TEMPLATE: &str = include_str!("recipe_prompt.txt");

/// Fixed instruction sent along with a kitchen photo.
pub const VISION_PROMPT: &str = include_str!("vision_prompt.txt");

/// Fill the recipe template in a single pass over it. Substituted text is
/// copied through as is, so braces inside user input are never expanded.
pub fn render_recipe_prompt(ingredients: &str, extra_constraints: &str, servings: u32) -> String {
    let servings = servings.to_string();
    let values = [
        ("{ingredients}", ingredients.trim()),
        ("{extra_constraints}", extra_constraints.trim()),
        ("{servings}", servings.as_str()),
    ];

    let mut prompt = String::with_capacity(RECIPE_PROMPT_TEMPLATE.len() + ingredients.len());
    let mut rest = RECIPE_PROMPT_TEMPLATE;
    while let Some(start) = rest.find('{') {
        prompt.push_str(&rest[..start]);
        rest = &rest[start..];
        match values.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, value)) => {
                prompt.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                prompt.push('{');
                rest = &rest[1..];
            }
        }
    }
    prompt.push_str(rest);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_are_embedded() {
        assert!(RECIPE_PROMPT_TEMPLATE.contains("{ingredients}"));
        assert!(RECIPE_PROMPT_TEMPLATE.contains("{extra_constraints}"));
        assert!(RECIPE_PROMPT_TEMPLATE.contains("{servings}"));
        assert!(RECIPE_PROMPT_TEMPLATE.contains("\"shopping_list\""));
        assert!(VISION_PROMPT.contains("malzeme"));
    }

    #[test]
    fn test_render_recipe_prompt() {
        let prompt = render_recipe_prompt("domates, soğan\n", "Tarifler vegan olmalı.", 4);
        assert!(prompt.contains("Elimde şu malzemeler var:\ndomates, soğan\n"));
        assert!(prompt.contains("Tarifler vegan olmalı."));
        assert!(prompt.contains("4 kişilik"));
        assert!(!prompt.contains("{ingredients}"));
        assert!(!prompt.contains("{servings}"));
        // schema braces survive
        assert!(prompt.contains("\"recipes\": ["));
    }

    #[test]
    fn test_user_braces_are_kept_verbatim() {
        let prompt = render_recipe_prompt("{servings} un", "Özel bir kısıt yok.", 2);
        assert!(prompt.contains("{servings} un"));
    }

    #[test]
    fn test_placeholders_in_constraints_are_not_expanded() {
        let prompt = render_recipe_prompt("domates", "Sadece {ingredients} kullan.", 2);
        assert!(prompt.contains("Sadece {ingredients} kullan."));
        assert!(prompt.contains("Elimde şu malzemeler var:\ndomates"));
        assert!(prompt.contains("2 kişilik"));
    }
}
