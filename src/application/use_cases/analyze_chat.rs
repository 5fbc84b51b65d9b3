use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::{
    build_prompt, format_transcript, normalize, AnalysisRequest, AnalysisResult, DomainError,
    SYSTEM_PROMPT,
};

pub struct AnalyzeChatUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl AnalyzeChatUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    /// Analyse a transcript and suggest replies.
    ///
    /// Fails with [`DomainError::InvalidInput`] before contacting the model when
    /// no message carries any text. Upstream failures propagate unchanged;
    /// unreadable model output is normalized into the fallback result.
    pub async fn execute(&self, request: &AnalysisRequest) -> Result<AnalysisResult, DomainError> {
        if !request.has_content() {
            return Err(DomainError::invalid_input("chat history must not be empty"));
        }
        let transcript = format_transcript(request.chat_history());

        info!(
            "Analyzing {} message(s) (style={}, context={})",
            request.chat_history().len(),
            request.reply_style(),
            request.context_info().is_some(),
        );

        let prompt = build_prompt(&transcript, request.reply_style(), request.context_info());
        debug!("Built analysis prompt ({} chars)", prompt.len());

        let start_time = Instant::now();
        let completion = CompletionRequest::new(SYSTEM_PROMPT, prompt);
        let raw = self.chat_client.complete(&completion).await?;

        info!(
            "Model {} responded in {:.2?} ({} chars)",
            self.chat_client.model(),
            start_time.elapsed(),
            raw.len()
        );
        debug!("Raw model response: {raw}");

        Ok(normalize(&raw))
    }
}
