use async_trait::async_trait;

use crate::domain::DomainError;

/// One chat-completion exchange: a system message, a user prompt and the
/// sampling knobs sent with them.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask providers that support extended reasoning to skip it.
    pub enable_thinking: bool,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: 0.7,
            max_tokens: 1500,
            enable_thinking: false,
        }
    }
}

/// An interface for sending chat-style prompts to an LLM and receiving text responses.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. The analysis use case stays decoupled from any particular provider
/// or HTTP client library, and a single implementor is shared across
/// concurrent requests.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the request and return the assistant's response text, which may be
    /// empty. Transport or provider failures are reported as
    /// [`DomainError::Upstream`].
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
