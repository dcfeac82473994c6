use std::sync::Arc;
use std::future::Future;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::{json, Value};

use crate::client::{Error, ErrorKind, Recipe, RecipeClient, RecipeReference};

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListRecipesParams {
    pub category: String,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetRecipeParams {
    pub id: String,
}

/// Sorts a category listing by name and keeps the names containing `search`.
///
/// Matching is a plain, case-sensitive substring test; an empty search keeps
/// everything.
pub fn browse_recipes(mut recipes: Vec<RecipeReference>, search: Option<&str>) -> Vec<RecipeReference> {
    recipes.sort_by(|a, b| a.name.cmp(&b.name));
    match search {
        Some(needle) if !needle.is_empty() => recipes
            .into_iter()
            .filter(|recipe| recipe.name.contains(needle))
            .collect(),
        _ => recipes,
    }
}

/// JSON shape returned by the `get_recipe` tool.
pub fn recipe_summary(recipe: &Recipe) -> Value {
    json!({
        "id": recipe.id,
        "name": recipe.name,
        "category": recipe.category,
        "area": recipe.area,
        "instructions": recipe.instructions,
        "thumbnail_url": recipe.thumbnail_url,
        "preview_url": recipe.preview_thumbnail_url(),
        "tags": recipe.tag_list(),
        "alternate_drink_name": recipe.alternate_drink_name,
        "video_url": recipe.video_url,
        "source_url": recipe.source_url,
        "image_source_url": recipe.image_source_url,
        "creative_commons_note": recipe.creative_commons_note,
        "date_modified": recipe.date_modified,
        "ingredients": recipe.ingredients,
        "ingredient_count": recipe.ingredients.len()
    })
}

/// Tool error payload. Not-found is a normal answer; the rest may be retried.
pub fn error_payload(context: &str, error: &Error) -> Value {
    match error.kind() {
        ErrorKind::NotFound => json!({
            "error": "Recipe not found",
            "details": error.to_string(),
            "retryable": false
        }),
        ErrorKind::Transport | ErrorKind::Decode => json!({
            "error": context,
            "details": error.to_string(),
            "retryable": error.is_retryable()
        }),
    }
}

fn pretty(value: &Value) -> Content {
    Content::text(serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()))
}

#[derive(Clone)]
pub struct MealDbMcpServer {
    client: Arc<RecipeClient>,
    tool_router: ToolRouter<MealDbMcpServer>,
}

#[tool_router]
impl MealDbMcpServer {
    pub fn new(client: RecipeClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    pub fn client(&self) -> &RecipeClient {
        &self.client
    }

    pub async fn test_api_access(&self) -> Result<(), Error> {
        tracing::debug!("Testing API access by fetching categories...");
        match self.client.list_categories().await {
            Ok(categories) => {
                tracing::info!("API access test successful - found {} categories", categories.len());
                Ok(())
            }
            Err(e) => {
                tracing::error!("API access test failed: {}", e);
                Err(e)
            }
        }
    }

    #[tool(description = "List all meal categories")]
    async fn list_categories(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: list_categories");

        match self.client.list_categories().await {
            Ok(categories) => {
                let result = json!({
                    "categories": categories.iter().map(|c| &c.name).collect::<Vec<_>>(),
                    "total_count": categories.len()
                });
                Ok(CallToolResult::success(vec![pretty(&result)]))
            }
            Err(e) => {
                tracing::error!("list_categories tool failed: {}", e);
                let error = error_payload("Failed to list categories", &e);
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(description = "List recipes in a category, sorted by name, optionally filtered by a search string")]
    async fn list_recipes(
        &self,
        Parameters(params): Parameters<ListRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: list_recipes({})", params.category);

        match self.client.list_recipes(&params.category).await {
            Ok(recipes) => {
                let recipes = browse_recipes(recipes, params.search.as_deref());
                let recipes_json: Vec<Value> = recipes
                    .iter()
                    .map(|recipe| {
                        json!({
                            "id": recipe.id,
                            "name": recipe.name,
                            "thumbnail_url": recipe.thumbnail_url,
                            "preview_url": recipe.preview_thumbnail_url()
                        })
                    })
                    .collect();

                let result = json!({
                    "category": params.category,
                    "recipes": recipes_json,
                    "total_count": recipes.len(),
                    "search_interpretation": format!("Found {} recipes{}",
                        recipes.len(),
                        params.search.as_ref().map_or(String::new(), |q| format!(" matching '{}'", q))
                    )
                });
                Ok(CallToolResult::success(vec![pretty(&result)]))
            }
            Err(e) => {
                tracing::error!("list_recipes tool failed: {}", e);
                let error = error_payload("Failed to list recipes", &e);
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    #[tool(description = "Get a recipe with its instructions and ordered ingredient list")]
    async fn get_recipe(
        &self,
        Parameters(params): Parameters<GetRecipeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: get_recipe({})", params.id);

        match self.client.get_recipe(&params.id).await {
            Ok(recipe) => Ok(CallToolResult::success(vec![pretty(&recipe_summary(&recipe))])),
            Err(e) => {
                if e.kind() == ErrorKind::NotFound {
                    tracing::debug!("get_recipe: {}", e);
                } else {
                    tracing::error!("get_recipe tool failed: {}", e);
                }
                let error = error_payload("Failed to get recipe", &e);
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for MealDbMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server provides read-only tools for browsing TheMealDB recipe database. Use list_categories to see meal categories, list_recipes to browse a category (with optional name search), and get_recipe to fetch full instructions and the ordered ingredient list for a recipe id.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
