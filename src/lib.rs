pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AnalyzeChatUseCase, ChatClient, CompletionRequest, ListStylesUseCase};

pub use cli::{Commands, OutputFormat};

pub use connector::{
    create_router, serve, ApiError, Container, ContainerConfig, MockChatClient, OpenAiChatClient,
    ServerConfig,
};

pub use domain::{
    build_prompt, fallback_result, format_transcript, normalize, AnalysisRequest, AnalysisResult,
    ChatMessage, DomainError, ReplyStyle, ReplySuggestion, Sender, StyleInfo,
};
