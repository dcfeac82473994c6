#![allow(dead_code)]

use mcp_mealdb::{ClientConfig, RecipeClient};
use mockito::ServerGuard;
use serde_json::{json, Map, Value};

pub async fn mock_server() -> ServerGuard {
    mockito::Server::new_async().await
}

/// Client with default endpoints pointed at the mock server.
pub fn client_for(server: &ServerGuard) -> RecipeClient {
    RecipeClient::with_config(ClientConfig::new(server.url()))
}

/// A meal object shaped like the lookup endpoint's, with `ingredients` in
/// slots 1.. and every remaining slot set to an empty string.
pub fn meal_json(id: &str, name: &str, ingredients: &[(&str, &str)]) -> Value {
    let mut meal = Map::new();
    meal.insert("idMeal".into(), json!(id));
    meal.insert("strMeal".into(), json!(name));
    meal.insert("strDrinkAlternate".into(), Value::Null);
    meal.insert("strCategory".into(), json!("Dessert"));
    meal.insert("strArea".into(), json!("Canadian"));
    meal.insert("strInstructions".into(), json!("Mix, pour and bake."));
    meal.insert(
        "strMealThumb".into(),
        json!("https://www.themealdb.com/images/media/meals/test.jpg"),
    );
    meal.insert("strTags".into(), json!("Pudding,Dessert"));
    meal.insert("strYoutube".into(), json!("https://www.youtube.com/watch?v=test"));
    meal.insert("strSource".into(), json!(""));
    meal.insert("strImageSource".into(), Value::Null);
    meal.insert("strCreativeCommonsConfirmed".into(), Value::Null);
    meal.insert("dateModified".into(), Value::Null);

    for slot in 1..=20 {
        let (ingredient, measure) = ingredients.get(slot - 1).copied().unwrap_or(("", ""));
        meal.insert(format!("strIngredient{}", slot), json!(ingredient));
        meal.insert(format!("strMeasure{}", slot), json!(measure));
    }

    Value::Object(meal)
}

pub fn meals_body(meals: Vec<Value>) -> String {
    json!({ "meals": meals }).to_string()
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
