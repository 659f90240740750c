//! Recipe schema and extraction from the model's text reply.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::RequestError;

/// A suggestion from the model. Every field is optional on the wire.
/// Missing, `null` or non-text values become empty; numbers and bools are
/// kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub additional_ingredients: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cooking_time: String,
}

#[derive(Debug, Default, Deserialize)]
struct RecipeReply {
    #[serde(default, deserialize_with = "lenient_recipes")]
    recipes: Vec<Recipe>,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// An array keeps its scalar items; a lone scalar becomes a one-item list.
fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

/// Entries that are not objects render as empty cards.
fn lenient_recipes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Recipe>, D::Error> {
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items
        .into_iter()
        .map(|item| Recipe::deserialize(item).unwrap_or_default())
        .collect())
}

/// Remove every ```` ```json ```` and ```` ``` ```` marker, wherever it
/// appears, then trim.
pub fn clean_reply(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse the model's reply into recipes.
///
/// A reply without a `recipes` key (or with a non-object top level) is an
/// empty list, not an error. Individual recipe fields are never validated.
/// Invalid JSON, a bare `null` and a `recipes` value that is not a list are
/// errors.
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>, RequestError> {
    let cleaned = clean_reply(text);
    let value: Value =
        serde_json::from_str(&cleaned).map_err(|source| RequestError::Parse {
            source,
            raw: text.to_string(),
        })?;

    match value {
        Value::Null => Err(RequestError::NullReply),
        Value::Object(_) => {
            let reply: RecipeReply =
                serde_json::from_value(value).map_err(|source| RequestError::Parse {
                    source,
                    raw: text.to_string(),
                })?;
            Ok(reply.recipes)
        }
        _ => Ok(Vec::new()),
    }
}
