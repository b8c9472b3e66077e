//! # Spoonacular HTTP Client
//!
//! Direct HTTP client for the two Spoonacular endpoints the chef book uses:
//! searching recipes by ingredients and fetching a recipe's full information.
//!
//! ## Modules
//!
//! - [`auth`] - API key wrapper with redacted debug output
//! - [`client`] - HTTP client implementation
//! - [`types`] - Type definitions for API responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use chef_book::client::{ApiKey, SpoonacularClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = SpoonacularClient::new(ApiKey::new("my-key"));
//!
//! let ingredients = vec!["egg".to_string(), "flour".to_string(), "milk".to_string()];
//! let candidates = client.find_by_ingredients(&ingredients).await?;
//! if let Some(first) = candidates.first() {
//!     let recipe = client.get_recipe_information(first.id).await?;
//!     println!("{}", recipe.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use auth::ApiKey;
pub use client::{SpoonacularClient, DEFAULT_BASE_URL, SEARCH_RESULT_LIMIT};
pub use types::*;
