//! Configuration for [`RecipeClient`](crate::client::RecipeClient).

use std::time::Duration;

/// Public TheMealDB API root (free test key `1`).
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

/// Base URL and endpoint templates used by the client.
///
/// Endpoint templates are appended to the base URL; the two parameterised
/// ones end with the query key, and the caller's argument is appended as-is.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root without a trailing slash
    pub base_url: String,

    /// Category listing path and query
    pub categories_endpoint: String,

    /// Filter-by-category path, ending in the query key
    pub recipes_by_category_endpoint: String,

    /// Lookup-by-id path, ending in the query key
    pub recipe_by_id_endpoint: String,

    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            categories_endpoint: "/list.php?c=list".to_string(),
            recipes_by_category_endpoint: "/filter.php?c=".to_string(),
            recipe_by_id_endpoint: "/lookup.php?i=".to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Default endpoints against a different API root, e.g. a mock server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_categories_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.categories_endpoint = endpoint.into();
        self
    }

    pub fn with_recipes_by_category_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.recipes_by_category_endpoint = endpoint.into();
        self
    }

    pub fn with_recipe_by_id_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.recipe_by_id_endpoint = endpoint.into();
        self
    }

    pub(crate) fn categories_url(&self) -> String {
        format!("{}{}", self.base_url, self.categories_endpoint)
    }

    pub(crate) fn recipes_by_category_url(&self, category: &str) -> String {
        format!("{}{}{}", self.base_url, self.recipes_by_category_endpoint, category)
    }

    pub(crate) fn recipe_by_id_url(&self, id: &str) -> String {
        format!("{}{}{}", self.base_url, self.recipe_by_id_endpoint, id)
    }
}
