//! UI state: the ingredient list plus the request state machine.
//!
//! [`Kitchen`] is a plain store with synchronous transitions. The network
//! part lives in [`finder::RecipeFinder`]; the caller starts a request with
//! [`Kitchen::begin_search`], runs the finder however it likes, and hands
//! the outcome back through [`Kitchen::finish_search`].

pub mod finder;

use tracing::debug;

use crate::error::FindError;
use crate::pantry::IngredientList;
use crate::recipe::Recipe;

/// Where the current search stands. Exactly one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(Vec<Recipe>),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Recipes to display; empty unless the last search succeeded.
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            RequestState::Succeeded(recipes) => recipes.as_slice(),
            _ => &[],
        }
    }

    /// Error line to display, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Identifies one started search. Only the newest ticket may settle the
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// A search that has been started and still needs its network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub ticket: Ticket,
    pub ingredients: Vec<String>,
}

/// The whole UI state.
#[derive(Debug, Default)]
pub struct Kitchen {
    ingredients: IngredientList,
    state: RequestState,
    issued: u64,
}

impl Kitchen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn add_ingredient(&mut self, text: &str) -> bool {
        self.ingredients.add(text)
    }

    pub fn remove_ingredient(&mut self, text: &str) -> bool {
        self.ingredients.remove(text)
    }

    /// Start a search from any state. Any search still in flight is
    /// superseded.
    ///
    /// With no ingredients this fails immediately and leaves the state at
    /// `Failed` with the validation message. Otherwise the state becomes
    /// `Loading` and the returned [`PendingSearch`] carries what the
    /// network call needs.
    pub fn begin_search(&mut self) -> Result<PendingSearch, FindError> {
        self.issued += 1;
        if self.ingredients.is_empty() {
            let err = FindError::NoIngredients;
            self.state = RequestState::Failed(err.user_message().to_string());
            return Err(err);
        }

        self.state = RequestState::Loading;
        Ok(PendingSearch {
            ticket: Ticket(self.issued),
            ingredients: self.ingredients.as_slice().to_vec(),
        })
    }

    /// Settle the search identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer search
    /// has been started since.
    pub fn finish_search(&mut self, ticket: Ticket, outcome: Result<Vec<Recipe>, FindError>) -> bool {
        if ticket.0 != self.issued {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "discarding outcome of superseded search"
            );
            return false;
        }

        self.state = match outcome {
            Ok(recipes) => RequestState::Succeeded(recipes),
            Err(err) => RequestState::Failed(err.user_message().to_string()),
        };
        true
    }
}
