//! # Chef Book Library
//!
//! Collect a handful of ingredients, then get a recipe idea for them from the
//! Spoonacular API. The library is split the same way the session works:
//!
//! ## Client Module
//!
//! The [`client`] module is a direct HTTP client for the two Spoonacular
//! endpoints used: search by ingredients and recipe information.
//!
//! ## Session
//!
//! [`book::ChefBook`] holds the session state, [`fetcher`] runs the
//! search-then-detail lookup, and [`presenter`] turns the state into a
//! printable [`presenter::View`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use chef_book::{presenter, ApiKey, ChefBook, SpoonacularClient};
//!
//! # async fn example() {
//! let client = SpoonacularClient::new(ApiKey::new("my-key"));
//! let mut book = ChefBook::new();
//! for ingredient in ["egg", "flour", "milk"] {
//!     book.add_ingredient(ingredient);
//! }
//!
//! let mut rng = rand::rng();
//! if let Some(notice) = book.fetch_recipe(&client, &mut rng).await {
//!     eprintln!("{}", notice);
//! }
//! println!("{}", presenter::render(&book));
//! # }
//! ```

pub mod book;
pub mod client;
pub mod config;
pub mod fetcher;
pub mod presenter;

pub use book::{ChefBook, Notice, MIN_INGREDIENTS};
pub use client::{ApiKey, SpoonacularClient};
pub use config::Config;
pub use fetcher::{fetch_recipe, pick_one, FetchOutcome};
