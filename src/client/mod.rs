//! # TheMealDB HTTP Client
//!
//! This module provides a read-only HTTP client for TheMealDB: list the meal
//! categories, list the recipes in a category, and fetch one recipe by id.
//!
//! ## Modules
//!
//! - [`client`] - The HTTP client and its three operations
//! - [`config`] - Base URL, endpoint templates and timeout
//! - [`error`] - Transport / decode / not-found error taxonomy
//! - [`types`] - Response types and the recipe decoder
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_mealdb::client::RecipeClient;
//!
//! # async fn example() -> Result<(), mcp_mealdb::client::Error> {
//! let client = RecipeClient::new();
//!
//! let categories = client.list_categories().await?;
//! let desserts = client.list_recipes("Dessert").await?;
//! let recipe = client.get_recipe(&desserts[0].id).await?;
//! println!("{} categories, {} needs {} ingredients",
//!     categories.len(), recipe.name, recipe.ingredients.len());
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::RecipeClient;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, TransportFailure};
pub use types::*;
