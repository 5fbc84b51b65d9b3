use serde::{Deserialize, Serialize};

use super::ReplyStyle;

/// Who wrote a transcript line.
///
/// Clients send `"me"` (or `"self"`) for the user asking for suggestions;
/// any other sender value is treated as the counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Sender {
    Me,
    Other,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Me => "me",
            Sender::Other => "other",
        }
    }

    /// Label used when rendering the transcript for the model.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::Me => "Me",
            Sender::Other => "Them",
        }
    }
}

impl From<String> for Sender {
    fn from(value: String) -> Self {
        Sender::from(value.as_str())
    }
}

impl From<&str> for Sender {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "me" | "self" => Sender::Me,
            _ => Sender::Other,
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    sender: Sender,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl ChatMessage {
    pub fn new(sender: impl Into<Sender>, content: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// A transcript plus the reply style and optional free-text context the user
/// wants the suggestions shaped by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    chat_history: Vec<ChatMessage>,
    #[serde(default)]
    reply_style: ReplyStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context_info: Option<String>,
}

impl AnalysisRequest {
    pub fn new(chat_history: Vec<ChatMessage>) -> Self {
        Self {
            chat_history,
            reply_style: ReplyStyle::default(),
            context_info: None,
        }
    }

    pub fn with_reply_style(mut self, style: ReplyStyle) -> Self {
        self.reply_style = style;
        self
    }

    pub fn with_context_info(mut self, context: impl Into<String>) -> Self {
        self.context_info = Some(context.into());
        self
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.chat_history
    }

    pub fn reply_style(&self) -> ReplyStyle {
        self.reply_style
    }

    /// The extra context, if it carries any non-whitespace text.
    pub fn context_info(&self) -> Option<&str> {
        self.context_info
            .as_deref()
            .filter(|info| !info.trim().is_empty())
    }

    pub fn has_content(&self) -> bool {
        self.chat_history.iter().any(|m| !m.is_blank())
    }
}
