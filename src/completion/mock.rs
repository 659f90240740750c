use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{CompletionClient, CompletionRequest, CompletionResponse};
use crate::error::RequestError;

/// One scripted reply.
pub enum MockReply {
    Response(CompletionResponse),
    Status { status: u16, body: String },
    Malformed(String),
}

impl MockReply {
    pub fn text(text: impl Into<String>) -> Self {
        MockReply::Response(CompletionResponse::from_text(text))
    }
}

/// A scripted client for tests. Returns pre-defined replies in order and
/// records every request it sees.
pub struct MockClient {
    replies: Vec<MockReply>,
    index: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockClient {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of times `complete` was called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, RequestError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request.clone());
        }
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(i) {
            Some(MockReply::Response(resp)) => Ok(resp.clone()),
            Some(MockReply::Status { status, body }) => Err(RequestError::Api {
                status: *status,
                body: body.clone(),
            }),
            Some(MockReply::Malformed(body)) => Err(RequestError::MalformedBody(body.clone())),
            None => Err(RequestError::MalformedBody(format!(
                "MockClient: no more replies (called {} times)",
                i + 1
            ))),
        }
    }
}
