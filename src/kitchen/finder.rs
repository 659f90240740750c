use std::sync::Arc;

use tracing::{error, info};

use super::{Kitchen, PendingSearch, Ticket};
use crate::completion::{CompletionClient, CompletionRequest, Message, TokenUsage};
use crate::consts::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::error::FindError;
use crate::prompts::recipes::build_recipe_prompt;
use crate::recipe::{Recipe, parse_recipes};

/// The outcome of one search, ready to hand back to [`Kitchen::finish_search`].
#[derive(Debug)]
pub struct Settled {
    pub ticket: Ticket,
    pub outcome: Result<Vec<Recipe>, FindError>,
    /// Present whenever the API answered, even if the reply did not parse.
    pub usage: Option<TokenUsage>,
}

/// Turns a [`PendingSearch`] into recipes: prompt, one API call, parse.
///
/// Cheap to clone so a search can be moved into a spawned task.
#[derive(Clone)]
pub struct RecipeFinder {
    client: Arc<dyn CompletionClient>,
    model: String,
    max_tokens: u32,
}

impl RecipeFinder {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Switch the model for subsequent searches.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn request_for(&self, ingredients: &[String]) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message::user(build_recipe_prompt(ingredients))],
        }
    }

    /// Run the network half of a search. Never touches UI state.
    pub async fn run(&self, pending: PendingSearch) -> Settled {
        let request = self.request_for(&pending.ingredients);
        info!(
            ingredients = pending.ingredients.len(),
            model = %self.model,
            "requesting recipes"
        );

        let (outcome, usage) = match self.client.complete(&request).await {
            Ok(response) => (
                parse_recipes(&response.text()).map_err(FindError::from),
                response.usage,
            ),
            Err(e) => (Err(FindError::from(e)), None),
        };

        match &outcome {
            Ok(recipes) => info!(count = recipes.len(), "recipes received"),
            Err(e) => error!(error = %e, "recipe request failed"),
        }

        Settled {
            ticket: pending.ticket,
            outcome,
            usage,
        }
    }

    /// Start, run, and settle a search on `kitchen` in one go.
    ///
    /// Returns the token usage of the call, if one was made.
    pub async fn search(&self, kitchen: &mut Kitchen) -> Option<TokenUsage> {
        let pending = kitchen.begin_search().ok()?;
        let settled = self.run(pending).await;
        kitchen.finish_search(settled.ticket, settled.outcome);
        settled.usage
    }
}
