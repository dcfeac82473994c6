mod common;

use common::meal_json;
use mcp_mealdb::client::{Category, IngredientLine, Recipe, RecipeReference};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn decode(value: Value) -> Recipe {
    serde_json::from_value(value).expect("recipe should decode")
}

fn line(ingredient: &str, measurement: &str) -> IngredientLine {
    IngredientLine {
        ingredient: ingredient.to_string(),
        measurement: measurement.to_string(),
    }
}

#[test]
fn test_ingredients_stop_at_first_empty_slot() {
    let mut meal = meal_json("1", "Gap", &[("Salt", "1 tsp")]);
    meal["strIngredient2"] = json!("");
    meal["strIngredient3"] = json!("Pepper");
    meal["strMeasure3"] = json!("pinch");

    let recipe = decode(meal);

    assert_eq!(recipe.ingredients, vec![line("Salt", "1 tsp")]);
}

#[test]
fn test_all_twenty_slots_in_order() {
    let names: Vec<String> = (1..=20).map(|i| format!("Ingredient {}", i)).collect();
    let measures: Vec<String> = (1..=20).map(|i| format!("{} g", i * 10)).collect();
    let pairs: Vec<(&str, &str)> = names
        .iter()
        .zip(&measures)
        .map(|(n, m)| (n.as_str(), m.as_str()))
        .collect();

    let recipe = decode(meal_json("2", "Full", &pairs));

    assert_eq!(recipe.ingredients.len(), 20);
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        assert_eq!(ingredient.ingredient, format!("Ingredient {}", i + 1));
        assert_eq!(ingredient.measurement, format!("{} g", (i + 1) * 10));
    }
}

#[test]
fn test_null_or_missing_ingredient_stops_scan() {
    let mut meal = meal_json("3", "Null", &[("Flour", "2 cups"), ("Sugar", "1 cup")]);
    meal["strIngredient2"] = Value::Null;
    assert_eq!(decode(meal).ingredients, vec![line("Flour", "2 cups")]);

    let meal = json!({
        "idMeal": "4",
        "strIngredient1": "Eggs",
        "strMeasure1": "3",
        "strIngredient3": "Milk"
    });
    assert_eq!(decode(meal).ingredients, vec![line("Eggs", "3")]);
}

#[test]
fn test_whitespace_only_ingredient_stops_scan() {
    let meal = meal_json("5", "Blank", &[("Butter", "50g"), ("   ", "1 cup"), ("Jam", "2 tbsp")]);
    assert_eq!(decode(meal).ingredients, vec![line("Butter", "50g")]);
}

#[test]
fn test_measurement_defaults_and_raw_values() {
    let meal = json!({
        "idMeal": "6",
        "strIngredient1": " Brown Sugar ",
        "strMeasure1": "1 cup ",
        "strIngredient2": "Vanilla",
        "strMeasure2": null,
        "strIngredient3": "Salt"
    });

    let recipe = decode(meal);

    assert_eq!(
        recipe.ingredients,
        vec![line(" Brown Sugar ", "1 cup "), line("Vanilla", ""), line("Salt", "")]
    );
}

#[test]
fn test_non_string_ingredient_counts_as_absent() {
    let meal = json!({
        "idMeal": "7",
        "strIngredient1": "Rice",
        "strMeasure1": 2,
        "strIngredient2": 42,
        "strIngredient3": "Beans"
    });

    assert_eq!(decode(meal).ingredients, vec![line("Rice", "")]);
}

#[test]
fn test_slots_outside_range_are_ignored() {
    let meal = json!({
        "idMeal": "8",
        "strIngredient0": "Zero",
        "strIngredient1": "One",
        "strIngredient21": "Twenty-one",
        "strIngredientX": "Letter"
    });

    assert_eq!(decode(meal).ingredients, vec![line("One", "")]);
}

#[test]
fn test_only_exact_slot_keys_are_read() {
    let recipe: Recipe = serde_json::from_str(
        r#"{"strIngredient1":"Salt","strMeasure1":"1 tsp","strIngredient01":"","strIngredient+1":"","strMeasure001":"2 kg","strIngredient2 ":"Oil"}"#,
    )
    .expect("recipe should decode");

    assert_eq!(recipe.ingredients, vec![line("Salt", "1 tsp")]);
}

#[test]
fn test_missing_and_null_strings_default_to_empty() {
    let meal = json!({
        "idMeal": "9",
        "strMeal": null,
        "strInstructions": null
    });

    let recipe = decode(meal);

    assert_eq!(recipe.id, "9");
    assert_eq!(recipe.name, "");
    assert_eq!(recipe.category, "");
    assert_eq!(recipe.area, "");
    assert_eq!(recipe.instructions, "");
    assert_eq!(recipe.thumbnail_url, "");
    assert_eq!(recipe.alternate_drink_name, None);
    assert_eq!(recipe.tags, None);
    assert_eq!(recipe.date_modified, None);
    assert!(recipe.ingredients.is_empty());
}

#[test]
fn test_url_fields_parse_when_valid() {
    let mut meal = meal_json("10", "Links", &[("Oats", "1 cup")]);
    meal["strSource"] = json!("https://example.com/oats");
    meal["strImageSource"] = json!("not a url");

    let recipe = decode(meal);

    assert_eq!(
        recipe.video_url.as_ref().map(|u| u.as_str()),
        Some("https://www.youtube.com/watch?v=test")
    );
    assert_eq!(
        recipe.source_url.as_ref().map(|u| u.as_str()),
        Some("https://example.com/oats")
    );
    assert_eq!(recipe.image_source_url, None);
}

#[test]
fn test_empty_url_is_absent() {
    let mut meal = meal_json("11", "No links", &[]);
    meal["strYoutube"] = json!("");

    let recipe = decode(meal);

    assert_eq!(recipe.video_url, None);
    assert_eq!(recipe.source_url, None);
}

#[test]
fn test_named_field_with_wrong_type_is_an_error() {
    let meal = json!({ "idMeal": 52932, "strMeal": "Numbers" });
    assert!(serde_json::from_value::<Recipe>(meal).is_err());

    assert!(serde_json::from_value::<Recipe>(json!(["not", "an", "object"])).is_err());
}

#[test]
fn test_recipe_reference_fields_are_lenient() {
    let rows: Vec<RecipeReference> = serde_json::from_value(json!([
        { "strMeal": "Apple Frangipan Tart", "strMealThumb": "https://img/1.jpg", "idMeal": "52768" },
        { "strMeal": "Bakewell tart", "idMeal": "52767" },
        { "strMeal": null, "strMealThumb": null }
    ]))
    .expect("listing should decode");

    assert_eq!(rows[0].id, "52768");
    assert_eq!(rows[1].thumbnail_url, "");
    assert_eq!(rows[1].name, "Bakewell tart");
    assert_eq!(rows[2].name, "");
    assert_eq!(rows[2].id, "");
}

#[test]
fn test_category_requires_name() {
    let category: Category = serde_json::from_value(json!({ "strCategory": "Beef" })).unwrap();
    assert_eq!(category, Category { name: "Beef".to_string() });

    assert!(serde_json::from_value::<Category>(json!({ "strArea": "British" })).is_err());
}

#[test]
fn test_presentation_helpers() {
    let mut meal = meal_json("12", "Helpers", &[("Cream", "200ml")]);
    meal["strTags"] = json!("Pudding, Dessert,,");

    let recipe = decode(meal);

    assert_eq!(recipe.tag_list(), vec!["Pudding".to_string(), "Dessert".to_string()]);
    assert_eq!(
        recipe.preview_thumbnail_url().as_deref(),
        Some("https://www.themealdb.com/images/media/meals/test.jpg/preview")
    );
    assert_eq!(recipe.ingredients[0].to_string(), "Cream: 200ml");

    let empty = RecipeReference {
        name: "No image".to_string(),
        thumbnail_url: String::new(),
        id: "1".to_string(),
    };
    assert_eq!(empty.preview_thumbnail_url(), None);
}
