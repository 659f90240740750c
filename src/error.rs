use thiserror::Error;

use crate::consts::{NO_INGREDIENTS_MESSAGE, REQUEST_FAILED_MESSAGE};

/// Anything that can go wrong between sending the prompt and holding a
/// list of recipes. The user only ever sees [`REQUEST_FAILED_MESSAGE`];
/// the variant is kept for the log.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("malformed API response: {0}")]
    MalformedBody(String),

    #[error("model reply is not valid recipe JSON: {source}\nraw: {raw}")]
    Parse {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("model reply is JSON null")]
    NullReply,

    #[error("search task failed: {0}")]
    Task(String),
}

/// Why a search did not produce recipes.
#[derive(Debug, Error)]
pub enum FindError {
    #[error("{}", NO_INGREDIENTS_MESSAGE)]
    NoIngredients,

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl FindError {
    /// The single line shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            FindError::NoIngredients => NO_INGREDIENTS_MESSAGE,
            FindError::Request(_) => REQUEST_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_static() {
        let err = FindError::NoIngredients;
        assert_eq!(err.user_message(), NO_INGREDIENTS_MESSAGE);
        assert_eq!(err.to_string(), NO_INGREDIENTS_MESSAGE);
    }

    #[test]
    fn request_errors_collapse_to_generic_message() {
        let api = FindError::from(RequestError::Api {
            status: 401,
            body: "invalid x-api-key".to_string(),
        });
        assert_eq!(api.user_message(), REQUEST_FAILED_MESSAGE);

        let null = FindError::from(RequestError::NullReply);
        assert_eq!(null.user_message(), REQUEST_FAILED_MESSAGE);
    }

    #[test]
    fn display_keeps_cause_for_logs() {
        let err = RequestError::Api {
            status: 500,
            body: "overloaded".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("overloaded"));
    }

    #[test]
    fn parse_error_includes_raw_text() {
        let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = RequestError::Parse {
            source,
            raw: "nope".to_string(),
        };
        assert!(err.to_string().contains("raw: nope"));
    }
}
