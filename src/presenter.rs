//! Turns a [`ChefBook`] into a [`View`] and draws it as text.
//!
//! [`render`] is a pure function of the session state; nothing here talks to
//! the network or mutates the book.

use std::fmt;

use crate::book::ChefBook;

pub const HEADER: &str = "🍳 My Chef Book";
pub const PROMPT: &str = "Type in your ingredients (list at least three):";
pub const INPUT_PLACEHOLDER: &str = "Enter an ingredient...";
pub const INGREDIENTS_HEADING: &str = "Ingredients you’ve added:";
pub const FETCH_PANEL_TEXT: &str = "Ready? Get a recipe idea based on your ingredients:";
pub const FETCH_LABEL: &str = "🍲 Get Recipe";
pub const FETCH_LABEL_LOADING: &str = "Cooking up ideas...";
pub const STEPS_HEADING: &str = "Cooking Steps:";
pub const NO_STEPS: &str = "No steps available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub header: &'static str,
    pub prompt: &'static str,
    /// The pending input, or `None` when the placeholder is showing.
    pub input: Option<String>,
    pub ingredients: Vec<String>,
    pub fetch_action: Option<FetchAction>,
    pub recipe: Option<RecipeCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchAction {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub title: String,
    pub image: Option<String>,
    pub image_alt: String,
    /// "Ready in N minutes · Serves M", whichever parts the provider gave.
    pub details: Option<String>,
    pub source_url: Option<String>,
    pub steps: StepList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepList {
    /// `(number, text)` pairs from the first instruction group.
    Steps(Vec<(u32, String)>),
    Unavailable,
}

pub fn render(book: &ChefBook) -> View {
    let input = Some(book.pending_input())
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    let fetch_action = book.fetch_available().then(|| FetchAction {
        label: if book.is_loading() {
            FETCH_LABEL_LOADING
        } else {
            FETCH_LABEL
        },
        enabled: !book.is_loading(),
    });

    let recipe = book.recipe().map(|recipe| RecipeCard {
        title: recipe.title.clone(),
        image: recipe.image.clone(),
        image_alt: recipe.title.clone(),
        details: recipe_details(recipe.ready_in_minutes, recipe.servings),
        source_url: recipe.source_url.clone(),
        steps: match recipe.first_steps() {
            Some(steps) => StepList::Steps(
                steps
                    .iter()
                    .map(|step| (step.number, step.step.clone()))
                    .collect(),
            ),
            None => StepList::Unavailable,
        },
    });

    View {
        header: HEADER,
        prompt: PROMPT,
        input,
        ingredients: book.ingredients().iter().map(|i| capitalize(i)).collect(),
        fetch_action,
        recipe,
    }
}

fn recipe_details(ready_in_minutes: Option<u32>, servings: Option<u32>) -> Option<String> {
    let parts: Vec<String> = [
        ready_in_minutes.map(|minutes| format!("Ready in {} minutes", minutes)),
        servings.map(|servings| format!("Serves {}", servings)),
    ]
    .into_iter()
    .flatten()
    .collect();

    (!parts.is_empty()).then(|| parts.join(" · "))
}

/// Upper-cases the first letter of every whitespace-separated word.
pub fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== {} ====", self.header)?;
        writeln!(f)?;
        writeln!(f, "{}", self.prompt)?;
        match &self.input {
            Some(text) => writeln!(f, "> {}", text)?,
            None => writeln!(f, "> {}", INPUT_PLACEHOLDER)?,
        }
        writeln!(f)?;

        writeln!(f, "{}", INGREDIENTS_HEADING)?;
        for ingredient in &self.ingredients {
            writeln!(f, "  • {}", ingredient)?;
        }

        if let Some(action) = &self.fetch_action {
            writeln!(f)?;
            writeln!(f, "{}", FETCH_PANEL_TEXT)?;
            if action.enabled {
                writeln!(f, "[ {} ]  (type /get)", action.label)?;
            } else {
                writeln!(f, "[ {} ]", action.label)?;
            }
        }

        if let Some(card) = &self.recipe {
            writeln!(f)?;
            writeln!(f, "---- {} ----", card.title)?;
            match &card.image {
                Some(image) => writeln!(f, "[image: {}] {}", card.image_alt, image)?,
                None => writeln!(f, "[image: {}]", card.image_alt)?,
            }
            if let Some(details) = &card.details {
                writeln!(f, "{}", details)?;
            }
            if let Some(url) = &card.source_url {
                writeln!(f, "Source: {}", url)?;
            }
            writeln!(f, "{}", STEPS_HEADING)?;
            match &card.steps {
                StepList::Steps(steps) => {
                    for (number, text) in steps {
                        writeln!(f, "  {}. {}", number, text)?;
                    }
                }
                StepList::Unavailable => writeln!(f, "  {}", NO_STEPS)?,
            }
        }

        Ok(())
    }
}
