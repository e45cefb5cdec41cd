use std::fmt;
use std::str::FromStr;

use crate::schema::RecipeDefaults;
use crate::text::fold_case;

/// Constraint text sent when no filter is active
pub const NO_CONSTRAINTS: &str = "Özel bir kısıt yok.";

/// Kind of dish the user is looking for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MealType {
    #[default]
    Any,
    MainCourse,
    Soup,
    Dessert,
    Meze,
    Breakfast,
}

impl MealType {
    pub const ALL: [MealType; 6] = [
        MealType::Any,
        MealType::MainCourse,
        MealType::Soup,
        MealType::Dessert,
        MealType::Meze,
        MealType::Breakfast,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Any => "Farketmez",
            MealType::MainCourse => "Ana yemek",
            MealType::Soup => "Çorba",
            MealType::Dessert => "Tatlı",
            MealType::Meze => "Meze",
            MealType::Breakfast => "Kahvaltı",
        }
    }

    /// Lower-case name used in prompts and recipe defaults, `None` for `Any`
    fn prompt_name(&self) -> Option<&'static str> {
        match self {
            MealType::Any => None,
            MealType::MainCourse => Some("ana yemek"),
            MealType::Soup => Some("çorba"),
            MealType::Dessert => Some("tatlı"),
            MealType::Meze => Some("meze"),
            MealType::Breakfast => Some("kahvaltı"),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealType {
    type Err = String;

    /// Matches a Turkish label case-insensitively ("çorba", "ANA YEMEK")
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = fold_case(label.trim());
        MealType::ALL
            .into_iter()
            .find(|m| fold_case(m.label()) == label)
            .ok_or_else(|| format!("unknown meal type: {}", label))
    }
}

/// Dietary preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Diet {
    #[default]
    None,
    Vegan,
    Vegetarian,
}

impl Diet {
    pub const ALL: [Diet; 3] = [Diet::None, Diet::Vegan, Diet::Vegetarian];

    pub fn label(&self) -> &'static str {
        match self {
            Diet::None => "Yok",
            Diet::Vegan => "Vegan",
            Diet::Vegetarian => "Vejetaryen",
        }
    }

    fn prompt_name(&self) -> Option<&'static str> {
        match self {
            Diet::None => None,
            Diet::Vegan => Some("vegan"),
            Diet::Vegetarian => Some("vejetaryen"),
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Diet {
    type Err = String;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = fold_case(label.trim());
        Diet::ALL
            .into_iter()
            .find(|d| fold_case(d.label()) == label)
            .ok_or_else(|| format!("unknown diet: {}", label))
    }
}

/// Active recipe filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilters {
    pub meal_type: MealType,
    pub diet: Diet,
    pub max_time_minutes: Option<u32>,
}

impl RecipeFilters {
    /// Renders one prompt line per active filter, or [`NO_CONSTRAINTS`].
    pub fn constraint_text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(meal) = self.meal_type.prompt_name() {
            lines.push(format!("Yemek türü: {} olmalı.", meal));
        }
        if let Some(diet) = self.diet.prompt_name() {
            lines.push(format!("Tarifler {} olmalı.", diet));
        }
        if let Some(minutes) = self.max_time_minutes {
            lines.push(format!(
                "Tariflerin pişirme süresi en fazla {} dakika olmalı.",
                minutes
            ));
        }

        if lines.is_empty() {
            NO_CONSTRAINTS.to_string()
        } else {
            lines.join("\n")
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meal_type == MealType::Any && self.diet == Diet::None && self.max_time_minutes.is_none()
    }
}

/// Everything needed for one recipe generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRequest {
    pub ingredients: String,
    pub servings: u32,
    pub filters: RecipeFilters,
}

impl RecipeRequest {
    pub fn new(ingredients: impl Into<String>, servings: u32) -> Self {
        RecipeRequest {
            ingredients: ingredients.into(),
            servings,
            filters: RecipeFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: RecipeFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Defaults for recipe fields the model omits
    pub fn defaults(&self) -> RecipeDefaults {
        RecipeDefaults {
            servings: self.servings,
            meal_type: self.filters.meal_type.prompt_name().map(String::from),
            diet: self.filters.diet.prompt_name().map(String::from),
        }
    }
}
