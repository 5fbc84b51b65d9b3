use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::DomainError;

/// Well-formed analysis returned by [`MockChatClient::new`].
pub const MOCK_ANALYSIS: &str = r#"{
    "context_analysis": "A casual exchange between two acquaintances.",
    "emotion_tone": "Relaxed",
    "conversation_summary": "The other person is making small talk.",
    "suggestions": [
        {"content": "Sounds good to me!", "explanation": "Agrees warmly and keeps the chat going.", "confidence": 0.9},
        {"content": "Haha, tell me more?", "explanation": "Invites them to keep sharing.", "confidence": 0.8},
        {"content": "Let me think about it and get back to you.", "explanation": "Buys time without closing the topic.", "confidence": 0.6}
    ]
}"#;

enum MockReply {
    Text(String),
    Fail(String),
}

/// Offline [`ChatClient`] that answers every request with a fixed reply.
///
/// Records how many calls it received and the last request, so callers can
/// check what would have been sent upstream.
pub struct MockChatClient {
    reply: MockReply,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_reply(MOCK_ANALYSIS)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::from_reply(MockReply::Text(reply.into()))
    }

    /// A client whose every call fails as an upstream error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_reply(MockReply::Fail(message.into()))
    }

    fn from_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }

        debug!("MockChatClient: answering prompt of {} chars", request.user.len());

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Fail(message) => Err(DomainError::upstream(message.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock-chat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize;

    #[tokio::test]
    async fn test_default_reply_is_a_full_analysis() {
        let client = MockChatClient::new();
        let text = client
            .complete(&CompletionRequest::new("sys", "user"))
            .await
            .unwrap();

        let result = normalize(&text);
        assert_eq!(result.suggestions().len(), 3);
        assert_eq!(result.emotion_tone(), "Relaxed");
        assert_eq!(client.calls(), 1);
        assert_eq!(client.last_request().unwrap().user, "user");
    }

    #[tokio::test]
    async fn test_failing_client_returns_upstream_error() {
        let client = MockChatClient::failing("boom");
        let err = client
            .complete(&CompletionRequest::new("sys", "user"))
            .await
            .unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(client.calls(), 1);
    }
}
