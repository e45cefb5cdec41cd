use clap::Parser;
use log::debug;
use mutfak_bilgini::{
    Diet, MealType, RecipeAssistant, RecipeFilters, RecipeRequest, Session, SuggestError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mutfak-bilgini")]
#[command(about = "Recipe suggestions from the ingredients you have")]
#[command(version)]
struct Cli {
    /// Kitchen photo to read ingredients from
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Number of people to cook for
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    servings: u32,

    /// Meal type label, e.g. "Çorba" or "Ana yemek"
    #[arg(short, long, default_value = "Farketmez")]
    meal: MealType,

    /// Diet label: "Yok", "Vegan" or "Vejetaryen"
    #[arg(short, long, default_value = "Yok")]
    diet: Diet,

    /// Longest acceptable cooking time in minutes
    #[arg(long)]
    max_time: Option<u32>,

    /// Ingredients you have, e.g. "domates, soğan, yumurta"
    ingredients: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let assistant = RecipeAssistant::builder().build()?;
    debug!("Using provider {}", assistant.provider_name());

    let mut session = Session::new();
    session.set_ingredients_input(cli.ingredients.join(" "));

    if let Some(path) = &cli.image {
        let bytes = tokio::fs::read(path).await?;
        let found = assistant.extract_ingredients(&bytes).await?;
        if found.is_empty() {
            println!("Fotoğrafta net malzeme bulunamadı.");
        } else {
            println!("Bulunan malzemeler: {}", found.to_input_text());
            session.append_ingredients(&found);
        }
    }

    if session.ingredients_input().trim().is_empty() {
        return Err("no ingredients given; pass them as arguments or use --image".into());
    }

    let filters = RecipeFilters {
        meal_type: cli.meal,
        diet: cli.diet,
        max_time_minutes: cli.max_time,
    };
    let request = RecipeRequest::new(session.ingredients_input(), cli.servings).with_filters(filters);

    let recipes = match assistant.suggest(&request).await {
        Ok(recipes) => recipes,
        Err(err @ SuggestError::MalformedSchema { .. }) => {
            eprintln!("{}", err);
            if let Some(raw) = err.raw_reply() {
                println!("{}", raw);
            }
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if recipes.is_empty() {
        println!("Herhangi bir tarif bulunamadı. Malzemeleri veya filtreleri değiştirmeyi deneyin.");
        return Ok(());
    }

    for recipe in &recipes {
        let time = recipe
            .time_minutes
            .map(|m| m.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!("\n## {} ({} kişilik, {} dk)", recipe.name, recipe.servings, time);
        if !recipe.difficulty.is_empty() {
            println!("Zorluk: {}", recipe.difficulty);
        }
        println!("Elimizde olan: {}", recipe.ingredients_have.join(", "));
        println!("Eksik: {}", recipe.ingredients_missing.join(", "));
        for (i, step) in recipe.steps.iter().enumerate() {
            println!("{}. {}", i + 1, step);
        }
    }

    if !recipes.shopping_list().is_empty() {
        println!("\nAlışveriş listesi: {}", recipes.shopping_list().join(", "));
    }

    Ok(())
}
