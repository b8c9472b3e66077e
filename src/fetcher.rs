//! Two-step recipe lookup: search by ingredients, pick one candidate at random,
//! then fetch that candidate's full record.

use rand::Rng;

use crate::client::{Recipe, SpoonacularClient};

/// What a single fetch attempt produced.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The detail request succeeded.
    Found(Recipe),
    /// The search succeeded but matched nothing. No detail request was made.
    Empty,
    /// Any failure along the way: network, status, or payload.
    Failed(anyhow::Error),
}

impl FetchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, FetchOutcome::Found(_))
    }
}

/// Picks one element uniformly at random. `None` for an empty slice.
pub fn pick_one<'a, T, R: Rng>(candidates: &'a [T], rng: &mut R) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.random_range(0..candidates.len()))
}

/// Runs the search then detail sequence against `client`.
///
/// Never returns an error: every failure is folded into
/// [`FetchOutcome::Failed`] so the caller decides how to present it.
pub async fn fetch_recipe<R: Rng>(
    client: &SpoonacularClient,
    ingredients: &[String],
    rng: &mut R,
) -> FetchOutcome {
    let candidates = match client.find_by_ingredients(ingredients).await {
        Ok(candidates) => candidates,
        Err(e) => return FetchOutcome::Failed(e.context("Recipe search failed")),
    };

    let Some(chosen) = pick_one(&candidates, rng) else {
        tracing::info!("No recipes matched {} ingredients", ingredients.len());
        return FetchOutcome::Empty;
    };

    tracing::info!(
        "Picked recipe {} ({}) out of {} candidates",
        chosen.id,
        chosen.title.as_deref().unwrap_or("untitled"),
        candidates.len()
    );

    match client.get_recipe_information(chosen.id).await {
        Ok(recipe) => FetchOutcome::Found(recipe),
        Err(e) => FetchOutcome::Failed(e.context(format!("Loading recipe {} failed", chosen.id))),
    }
}
