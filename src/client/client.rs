use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::client::{
    config::ClientConfig,
    error::{Error, Result},
    types::*,
};

/// Read-only client for the three TheMealDB endpoints.
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent calls. Dropping a returned future abandons the request.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    config: ClientConfig,
    client: Client,
}

impl Default for RecipeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeClient {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Lists every category, in the order the API returns them.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let url = self.config.categories_url();
        let envelope: MealsEnvelope<Category> = self.fetch(&url).await?;

        // A null list here means the endpoint is broken, not empty
        let categories = match envelope.meals {
            Some(categories) => categories,
            None => {
                tracing::error!("Category list from {} had no meals array", url);
                return Err(Error::decode(
                    &url,
                    serde::de::Error::custom("missing `meals` array"),
                ));
            }
        };

        tracing::debug!("Decoded {} categories", categories.len());
        Ok(categories)
    }

    /// Lists recipes in `category`. The category is appended to the query
    /// string unchanged; an unknown category gives an empty list.
    pub async fn list_recipes(&self, category: &str) -> Result<Vec<RecipeReference>> {
        let url = self.config.recipes_by_category_url(category);
        let envelope: MealsEnvelope<RecipeReference> = self.fetch(&url).await?;

        let recipes = envelope.meals.unwrap_or_default();
        tracing::debug!("Decoded {} recipes for category {}", recipes.len(), category);
        Ok(recipes)
    }

    /// Fetches one recipe with its ingredient list rebuilt.
    pub async fn get_recipe(&self, id: &str) -> Result<Recipe> {
        let url = self.config.recipe_by_id_url(id);
        let envelope: MealsEnvelope<Recipe> = self.fetch(&url).await?;

        // Lookup answers {"meals": null} for ids it doesn't know
        let recipe = envelope
            .meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or_else(|| {
                tracing::debug!("No recipe with id {}", id);
                Error::NotFound { id: id.to_string() }
            })?;

        tracing::debug!(
            "Decoded recipe {} with {} ingredients",
            recipe.id,
            recipe.ingredients.len()
        );
        Ok(recipe)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Making request to: {}", url);

        let mut request = self.client.get(url);
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Network error requesting {}: {}", url, e);
            Error::network(url, e)
        })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            tracing::error!("Request to {} failed with status {}", url, status);
            return Err(Error::unexpected_status(url, status));
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            Error::network(url, e)
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Failed to parse response from {}: {}", url, e);
            Error::decode(url, e)
        })
    }
}
