//! Type definitions for TheMealDB API.
//!
//! TheMealDB wraps every response in a `{"meals": ...}` object and stores a
//! recipe's ingredients as twenty pairs of flat fields
//! (`strIngredient1`..`strIngredient20`, `strMeasure1`..`strMeasure20`)
//! instead of an array. The types here turn that into plain records.
//!
//! ## Key Types
//!
//! - [`Category`] - A meal category such as "Dessert"
//! - [`RecipeReference`] - A row from a category listing
//! - [`Recipe`] - Full recipe detail with an ordered ingredient list
//! - [`IngredientLine`] - One ingredient and its measurement
//!
//! ## API Compatibility
//!
//! The upstream data is sparsely populated, so decoding is lenient per field:
//! - Listing rows default missing fields to empty strings
//! - [`Recipe`] has a hand-written deserializer that defaults missing strings,
//!   drops unparseable URLs and rebuilds the ingredient list

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// Number of numbered ingredient/measure slots in a recipe object.
pub const INGREDIENT_SLOTS: usize = 20;

const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Response wrapper shared by all three endpoints.
///
/// `meals` is `null` when a lookup or filter matches nothing.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

/// A meal category. Two categories are equal when their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename(deserialize = "strCategory"))]
    pub name: String,
}

/// Lightweight listing row returned by the filter endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeReference {
    #[serde(rename(deserialize = "strMeal"), default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename(deserialize = "strMealThumb"), default, deserialize_with = "null_as_empty")]
    pub thumbnail_url: String,
    /// Stable key for [`crate::RecipeClient::get_recipe`]
    #[serde(rename(deserialize = "idMeal"), default, deserialize_with = "null_as_empty")]
    pub id: String,
}

/// One position in a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IngredientLine {
    pub ingredient: String,
    pub measurement: String,
}

/// A complete recipe as returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub thumbnail_url: String,
    pub alternate_drink_name: Option<String>,
    pub tags: Option<String>,
    pub video_url: Option<Url>,
    pub source_url: Option<Url>,
    pub image_source_url: Option<Url>,
    pub creative_commons_note: Option<String>,
    pub date_modified: Option<String>,
    /// Ingredients in slot order, cut at the first empty slot
    pub ingredients: Vec<IngredientLine>,
}

impl RecipeReference {
    /// Small variant of the thumbnail, served by the image host at `<thumb>/preview`.
    pub fn preview_thumbnail_url(&self) -> Option<String> {
        preview_url(&self.thumbnail_url)
    }
}

impl Recipe {
    pub fn preview_thumbnail_url(&self) -> Option<String> {
        preview_url(&self.thumbnail_url)
    }

    /// `strTags` split on commas, e.g. `"Pie,Dessert"`.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.ingredient, self.measurement)
    }
}

fn preview_url(thumbnail_url: &str) -> Option<String> {
    let base = thumbnail_url.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| format!("{}/preview", base))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses `value` as a URL, treating empty or malformed input as absent.
fn parse_url(value: Option<String>) -> Option<Url> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).ok()
}

/// Maps a key like `strIngredient7` to slot index 6. Only the exact key
/// names match; `strIngredient07` or `strIngredient+7` do not.
fn slot_index(key: &str, prefix: &str) -> Option<usize> {
    let suffix = key.strip_prefix(prefix)?;
    if suffix.starts_with('0') || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: usize = suffix.parse().ok()?;
    (1..=INGREDIENT_SLOTS).contains(&n).then(|| n - 1)
}

/// Rebuilds the ordered ingredient list from numbered slots.
///
/// Walks slots 1 through 20 and stops at the first one whose ingredient is
/// absent or blank. Later slots are never looked at, even if populated.
/// Values are stored as given; trimming only decides blankness.
pub(crate) fn collect_ingredients<'a, I, M>(ingredient_at: I, measure_at: M) -> Vec<IngredientLine>
where
    I: Fn(usize) -> Option<&'a str>,
    M: Fn(usize) -> Option<&'a str>,
{
    let mut lines = Vec::new();
    for slot in 0..INGREDIENT_SLOTS {
        let ingredient = match ingredient_at(slot) {
            Some(name) if !name.trim().is_empty() => name,
            _ => break,
        };
        let measurement = measure_at(slot).unwrap_or_default();
        lines.push(IngredientLine {
            ingredient: ingredient.to_string(),
            measurement: measurement.to_string(),
        });
    }
    lines
}

/// Custom deserializer for Recipe to handle the flattened ingredient slots.
///
/// Named string fields accept a string or `null`. Ingredient and measure
/// slots accept anything; a non-string value counts as absent.
impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};

        struct RecipeVisitor;

        impl<'de> Visitor<'de> for RecipeVisitor {
            type Value = Recipe;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a meal object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id: Option<String> = None;
                let mut name: Option<String> = None;
                let mut alternate_drink_name: Option<String> = None;
                let mut category: Option<String> = None;
                let mut area: Option<String> = None;
                let mut instructions: Option<String> = None;
                let mut thumbnail_url: Option<String> = None;
                let mut tags: Option<String> = None;
                let mut youtube: Option<String> = None;
                let mut source: Option<String> = None;
                let mut image_source: Option<String> = None;
                let mut creative_commons: Option<String> = None;
                let mut date_modified: Option<String> = None;
                let mut ingredient_slots: [Option<String>; INGREDIENT_SLOTS] = Default::default();
                let mut measure_slots: [Option<String>; INGREDIENT_SLOTS] = Default::default();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "idMeal" => id = map.next_value()?,
                        "strMeal" => name = map.next_value()?,
                        "strDrinkAlternate" => alternate_drink_name = map.next_value()?,
                        "strCategory" => category = map.next_value()?,
                        "strArea" => area = map.next_value()?,
                        "strInstructions" => instructions = map.next_value()?,
                        "strMealThumb" => thumbnail_url = map.next_value()?,
                        "strTags" => tags = map.next_value()?,
                        "strYoutube" => youtube = map.next_value()?,
                        "strSource" => source = map.next_value()?,
                        "strImageSource" => image_source = map.next_value()?,
                        "strCreativeCommonsConfirmed" => creative_commons = map.next_value()?,
                        "dateModified" => date_modified = map.next_value()?,
                        other => {
                            let value = map.next_value::<serde_json::Value>()?;
                            let text = value.as_str().map(str::to_string);
                            if let Some(slot) = slot_index(other, INGREDIENT_PREFIX) {
                                ingredient_slots[slot] = text;
                            } else if let Some(slot) = slot_index(other, MEASURE_PREFIX) {
                                measure_slots[slot] = text;
                            }
                        }
                    }
                }

                let ingredients = collect_ingredients(
                    |slot| ingredient_slots[slot].as_deref(),
                    |slot| measure_slots[slot].as_deref(),
                );

                Ok(Recipe {
                    id: id.unwrap_or_default(),
                    name: name.unwrap_or_default(),
                    category: category.unwrap_or_default(),
                    area: area.unwrap_or_default(),
                    instructions: instructions.unwrap_or_default(),
                    thumbnail_url: thumbnail_url.unwrap_or_default(),
                    alternate_drink_name,
                    tags,
                    video_url: parse_url(youtube),
                    source_url: parse_url(source),
                    image_source_url: parse_url(image_source),
                    creative_commons_note: creative_commons,
                    date_modified,
                    ingredients,
                })
            }
        }

        deserializer.deserialize_map(RecipeVisitor)
    }
}
