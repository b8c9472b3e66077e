//! # Chef Book Session State
//!
//! [`ChefBook`] owns everything one session needs: the ingredient list, the
//! text currently typed into the input, the last fetched recipe and the
//! loading flag. It is created when a session starts and dropped when it ends.
//!
//! Fetching is split into [`ChefBook::begin_fetch`] and
//! [`ChefBook::finish_fetch`] around the network calls, so a caller can
//! redraw the loading state while the request is in flight.
//! [`ChefBook::fetch_recipe`] runs all three steps for callers that don't
//! need that.

use std::fmt;

use rand::Rng;

use crate::client::{Recipe, SpoonacularClient};
use crate::fetcher::{self, FetchOutcome};

/// Number of ingredients required before a recipe can be fetched.
pub const MIN_INGREDIENTS: usize = 3;

/// User-facing notification raised by a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoRecipes,
    FetchFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoRecipes => "No recipes found with those ingredients.",
            Notice::FetchFailed => "Error fetching recipe",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Default)]
pub struct ChefBook {
    ingredients: Vec<String>,
    pending_input: String,
    recipe: Option<Recipe>,
    loading: bool,
}

impl ChefBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the fetch action is shown at all.
    pub fn fetch_available(&self) -> bool {
        self.ingredients.len() >= MIN_INGREDIENTS
    }

    /// Whether the fetch action is shown and enabled.
    pub fn can_fetch(&self) -> bool {
        self.fetch_available() && !self.loading
    }

    /// Mirrors the raw input control. No trimming.
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Appends `text` trimmed and clears the pending input.
    ///
    /// Blank text is ignored and leaves the pending input as it was.
    /// Returns whether an ingredient was added.
    pub fn add_ingredient(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        tracing::debug!("Adding ingredient '{}'", trimmed);
        self.ingredients.push(trimmed.to_string());
        self.pending_input.clear();
        true
    }

    /// Form submission: adds whatever is in the pending input.
    pub fn submit_input(&mut self) -> bool {
        let text = std::mem::take(&mut self.pending_input);
        let added = self.add_ingredient(&text);
        if !added {
            self.pending_input = text;
        }
        added
    }

    /// Enters the loading state and returns the ingredients to search with.
    ///
    /// The ingredient gate is not checked here; callers hide the action
    /// instead.
    pub fn begin_fetch(&mut self) -> Vec<String> {
        self.loading = true;
        self.ingredients.clone()
    }

    /// Applies a fetch outcome and leaves the loading state.
    pub fn finish_fetch(&mut self, outcome: FetchOutcome) -> Option<Notice> {
        let notice = match outcome {
            FetchOutcome::Found(recipe) => {
                tracing::info!("Showing recipe {}: {}", recipe.id, recipe.title);
                self.recipe = Some(recipe);
                None
            }
            FetchOutcome::Empty => {
                self.recipe = None;
                Some(Notice::NoRecipes)
            }
            FetchOutcome::Failed(e) => {
                // The previous recipe, if any, stays on screen.
                tracing::error!("Error fetching recipe: {:#}", e);
                Some(Notice::FetchFailed)
            }
        };

        self.loading = false;
        notice
    }

    pub async fn fetch_recipe<R: Rng>(
        &mut self,
        client: &SpoonacularClient,
        rng: &mut R,
    ) -> Option<Notice> {
        let ingredients = self.begin_fetch();
        let outcome = fetcher::fetch_recipe(client, &ingredients, rng).await;
        self.finish_fetch(outcome)
    }
}
