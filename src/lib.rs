//! # MealDB MCP Library
//!
//! This library provides tools for browsing TheMealDB (a public recipe
//! database) through the Model Context Protocol (MCP). It consists of two
//! main components:
//!
//! ## Client Module
//!
//! The [`client`] module provides a direct HTTP client for TheMealDB API:
//! categories, recipes by category, and full recipe detail.
//!
//! ## Server Module
//!
//! The [`server`] module implements an MCP server that exposes those three
//! calls as tools that AI assistants can use.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_mealdb::{ClientConfig, MealDbMcpServer, RecipeClient};
//!
//! // Use the client directly
//! let client = RecipeClient::new();
//!
//! // Or point it somewhere else and wrap it in an MCP server
//! let config = ClientConfig::new("http://localhost:8080/api/json/v1/1");
//! let server = MealDbMcpServer::new(RecipeClient::with_config(config));
//! ```

pub mod client;
pub mod server;

pub use client::{ClientConfig, RecipeClient};
pub use server::MealDbMcpServer;
