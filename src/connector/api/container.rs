use std::sync::Arc;

use tracing::debug;

use crate::application::{AnalyzeChatUseCase, ChatClient, ListStylesUseCase};
use crate::connector::adapter::{MockChatClient, OpenAiChatClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub struct ContainerConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Answer from the offline mock instead of calling a provider.
    pub mock_llm: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            mock_llm: false,
        }
    }
}

/// Long-lived dependencies shared by every request: the resolved config and
/// the one chat client handle.
pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            debug!(
                "Using OpenAI-compatible chat client at {} (model {})",
                config.base_url, config.model
            );
            Arc::new(OpenAiChatClient::new(
                config.api_key.clone(),
                config.model.clone(),
                config.base_url.clone(),
            ))
        };

        Self {
            chat_client,
            config,
        }
    }

    /// Build a container around an already constructed client.
    pub fn with_chat_client(config: ContainerConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            config,
        }
    }

    pub fn analyze_use_case(&self) -> AnalyzeChatUseCase {
        AnalyzeChatUseCase::new(self.chat_client.clone())
    }

    pub fn list_styles_use_case(&self) -> ListStylesUseCase {
        ListStylesUseCase::new()
    }

    pub fn model(&self) -> &str {
        self.chat_client.model()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn mock_llm(&self) -> bool {
        self.config.mock_llm
    }
}
