//! The completion API seam. [`anthropic::AnthropicClient`] talks HTTP;
//! [`mock::MockClient`] replays scripted replies in tests.

pub mod anthropic;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of a Messages API request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

/// Body of a Messages API response. Only `content` is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// A response with one text block, mostly for tests.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            usage: None,
        }
    }

    /// All blocks joined with newlines; non-text blocks contribute an
    /// empty line.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|block| {
                if block.content_type == "text" {
                    block.text.as_deref().unwrap_or("")
                } else {
                    ""
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub content_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: Some(text.into()),
        }
    }
}

/// Token usage from a single LLM call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Accumulate another usage into this one.
    pub fn add(&mut self, other: TokenUsage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }

    /// Total tokens (input + output).
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Anything that can answer a [`CompletionRequest`]. Could be the real
/// API or a test script.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, RequestError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_shape() {
        let request = CompletionRequest {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1000,
            messages: vec![Message::user("hi")],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 1000,
                "messages": [{"role": "user", "content": "hi"}]
            })
        );
    }

    #[test]
    fn response_requires_content() {
        assert!(serde_json::from_str::<CompletionResponse>(r#"{"usage": {}}"#).is_err());
        assert!(serde_json::from_str::<CompletionResponse>(r#"{"content": []}"#).is_ok());
    }

    #[test]
    fn text_joins_blocks_in_order() {
        let resp: CompletionResponse = serde_json::from_str(
            r#"{"content": [
                {"type": "text", "text": "first"},
                {"type": "tool_use", "id": "x"},
                {"type": "text", "text": "second"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.text(), "first\n\nsecond");
    }

    #[test]
    fn text_of_empty_content_is_empty() {
        assert_eq!(CompletionResponse::default().text(), "");
    }

    #[test]
    fn usage_is_parsed() {
        let resp: CompletionResponse = serde_json::from_str(
            r#"{"content": [], "usage": {"input_tokens": 12, "output_tokens": 34}}"#,
        )
        .unwrap();
        assert_eq!(resp.usage.unwrap().total(), 46);
    }

    #[test]
    fn usage_accumulates() {
        let mut total = TokenUsage::default();
        total.add(TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
        });
        total.add(TokenUsage {
            input_tokens: 1,
            output_tokens: 2,
        });
        assert_eq!(total.input_tokens, 11);
        assert_eq!(total.output_tokens, 7);
        assert_eq!(total.total(), 18);
    }
}
