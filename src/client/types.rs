//! Type definitions for the Spoonacular recipe API.
//!
//! Only the fields the chef book reads are modelled. Everything else in the
//! provider's payloads is ignored by serde, so new fields on their side never
//! break deserialization.
//!
//! ## Key Types
//!
//! - [`Candidate`] - Partial record returned by `findByIngredients`
//! - [`Recipe`] - Full record returned by `/recipes/{id}/information`
//! - [`InstructionGroup`] - One ordered list of [`Step`]s

use serde::{Deserialize, Serialize};

/// A partial recipe returned by the ingredient search.
///
/// Carries just enough to request the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Provider recipe identifier
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
}

/// A complete recipe as returned by the information endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Provider recipe identifier
    #[serde(default)]
    pub id: i64,
    pub title: String,
    /// Image URL. Some provider records have none.
    #[serde(default)]
    pub image: Option<String>,
    /// Instruction groups in provider order. Only the first is displayed.
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionGroup>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl Recipe {
    /// Steps of the first instruction group, if there is one.
    pub fn first_steps(&self) -> Option<&[Step]> {
        self.analyzed_instructions
            .first()
            .map(|group| group.steps.as_slice())
    }
}

/// One ordered list of steps. Recipes with sub-recipes carry several groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub number: u32,
    pub step: String,
}
