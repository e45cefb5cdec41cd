use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{Recipe, RecipeSet, UNTITLED_RECIPE};
use crate::normalize::normalize;

/// Ways a model reply can fail to describe a recipe collection
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("reply is not a JSON object")]
    NotAnObject,

    #[error("field `{field}` should be {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
}

/// Values used for recipe fields the model leaves out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDefaults {
    pub servings: u32,
    pub meal_type: Option<String>,
    pub diet: Option<String>,
}

impl RecipeDefaults {
    pub fn new(servings: u32) -> Self {
        RecipeDefaults {
            servings,
            meal_type: None,
            diet: None,
        }
    }
}

/// Normalizes, parses and validates a raw model reply.
pub fn parse_reply(raw: &str, defaults: &RecipeDefaults) -> Result<RecipeSet, SchemaError> {
    let payload: Value = serde_json::from_str(normalize(raw))?;
    validate(&payload, defaults)
}

/// Coerces a parsed reply into a [`RecipeSet`].
///
/// Missing `recipes` or `shopping_list` keys mean empty collections. A key
/// that is present with the wrong type is an error. Missing fields inside a
/// recipe are filled from `defaults`.
pub fn validate(payload: &Value, defaults: &RecipeDefaults) -> Result<RecipeSet, SchemaError> {
    let object = payload.as_object().ok_or(SchemaError::NotAnObject)?;

    let recipes = match object.get("recipes") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(fields) => Ok(recipe_from_fields(fields, defaults)),
                _ => Err(SchemaError::WrongType {
                    field: format!("recipes[{}]", i),
                    expected: "an object",
                }),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(SchemaError::WrongType {
                field: "recipes".to_string(),
                expected: "a list",
            })
        }
    };

    let shopping_list: Vec<String> = match object.get("shopping_list") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(text_of).collect(),
        Some(_) => {
            return Err(SchemaError::WrongType {
                field: "shopping_list".to_string(),
                expected: "a list",
            })
        }
    };

    Ok(RecipeSet::new(recipes, shopping_list))
}

fn recipe_from_fields(fields: &Map<String, Value>, defaults: &RecipeDefaults) -> Recipe {
    let text_field = |key: &str| fields.get(key).and_then(text_of);
    let list_field = |key: &str| -> Vec<String> {
        match fields.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(text_of).collect(),
            _ => Vec::new(),
        }
    };

    Recipe {
        name: text_field("name").unwrap_or_else(|| UNTITLED_RECIPE.to_string()),
        servings: fields
            .get("servings")
            .and_then(positive_int)
            .unwrap_or(defaults.servings),
        time_minutes: fields.get("time_minutes").and_then(positive_int),
        difficulty: text_field("difficulty").unwrap_or_default(),
        meal_type: text_or_default(fields.get("meal_type"), &defaults.meal_type),
        diet: text_or_default(fields.get("diet"), &defaults.diet),
        ingredients_have: list_field("ingredients_have"),
        ingredients_missing: list_field("ingredients_missing"),
        steps: list_field("steps"),
    }
}

/// Only an absent (or null) field takes the default; a blank one stays blank.
fn text_or_default(value: Option<&Value>, default: &Option<String>) -> String {
    match value {
        None | Some(Value::Null) => default.clone().unwrap_or_default(),
        Some(value) => text_of(value).unwrap_or_default(),
    }
}

/// Non-blank trimmed text from a string or number value
fn text_of(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Positive integer from a number or a string starting with digits ("30 dk")
fn positive_int(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f.round() as u64))?,
        Value::String(s) => {
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()?
        }
        _ => return None,
    };
    u32::try_from(n).ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> RecipeDefaults {
        RecipeDefaults::new(2)
    }

    #[test]
    fn test_empty_object_is_empty_set() {
        let set = validate(&json!({}), &defaults()).unwrap();
        assert!(set.is_empty());
        assert!(set.shopping_list().is_empty());
    }

    #[test]
    fn test_recipes_not_a_list() {
        let err = validate(&json!({"recipes": "not-a-list"}), &defaults()).unwrap_err();
        assert!(matches!(err, SchemaError::WrongType { ref field, .. } if field == "recipes"));
    }

    #[test]
    fn test_shopping_list_not_a_list() {
        let err = validate(&json!({"shopping_list": {"a": 1}}), &defaults()).unwrap_err();
        assert!(err.to_string().contains("shopping_list"));
    }

    #[test]
    fn test_non_object_payload() {
        assert!(matches!(
            validate(&json!(["a"]), &defaults()),
            Err(SchemaError::NotAnObject)
        ));
    }

    #[test]
    fn test_recipe_entry_must_be_object() {
        let err = validate(&json!({"recipes": [{"name": "A"}, "B"]}), &defaults()).unwrap_err();
        assert_eq!(err.to_string(), "field `recipes[1]` should be an object");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let defaults = RecipeDefaults {
            servings: 4,
            meal_type: Some("çorba".to_string()),
            diet: None,
        };
        let set = validate(&json!({"recipes": [{}]}), &defaults).unwrap();
        let recipe = &set.recipes()[0];
        assert_eq!(recipe.name, UNTITLED_RECIPE);
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.time_minutes, None);
        assert_eq!(recipe.meal_type, "çorba");
        assert_eq!(recipe.diet, "");
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_blank_meal_type_is_not_defaulted() {
        let defaults = RecipeDefaults {
            servings: 2,
            meal_type: Some("çorba".to_string()),
            diet: Some("vegan".to_string()),
        };
        let payload = json!({"recipes": [
            {"meal_type": "", "diet": "  "},
            {"meal_type": null}
        ]});
        let set = validate(&payload, &defaults).unwrap();
        assert_eq!(set.recipes()[0].meal_type, "");
        assert_eq!(set.recipes()[0].diet, "");
        assert_eq!(set.recipes()[1].meal_type, "çorba");
        assert_eq!(set.recipes()[1].diet, "vegan");
    }

    #[test]
    fn test_full_recipe() {
        let payload = json!({
            "recipes": [{
                "name": "Menemen",
                "servings": 3,
                "time_minutes": "20 dk",
                "difficulty": "kolay",
                "meal_type": "kahvaltı",
                "diet": "vejetaryen",
                "ingredients_have": ["domates", "yumurta"],
                "ingredients_missing": ["biber", ""],
                "steps": ["Doğra", "Pişir"]
            }],
            "shopping_list": ["biber", "Biber"]
        });
        let set = validate(&payload, &defaults()).unwrap();
        let recipe = &set.recipes()[0];
        assert_eq!(recipe.servings, 3);
        assert_eq!(recipe.time_minutes, Some(20));
        assert_eq!(recipe.ingredients_missing, vec!["biber"]);
        assert_eq!(recipe.steps.len(), 2);
        assert_eq!(set.shopping_list(), &["biber"]);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let payload = json!({"recipes": [{"servings": 0, "time_minutes": "yaklaşık"}]});
        let set = validate(&payload, &defaults()).unwrap();
        assert_eq!(set.recipes()[0].servings, 2);
        assert_eq!(set.recipes()[0].time_minutes, None);
    }

    #[test]
    fn test_null_keys_are_empty() {
        let set = validate(&json!({"recipes": null, "shopping_list": null}), &defaults()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_reply_invalid_json() {
        let err = parse_reply("{not json}", &defaults()).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_reply_preserves_order() {
        let raw = r#"```json
{"recipes": [{"name": "C"}, {"name": "A"}, {"name": "B"}]}
```"#;
        let set = parse_reply(raw, &defaults()).unwrap();
        let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
