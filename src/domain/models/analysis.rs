use serde::{Deserialize, Serialize};

/// Confidence assigned when the model omits one.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplySuggestion {
    content: String,
    explanation: String,
    confidence: f64,
}

impl ReplySuggestion {
    /// Build a suggestion; `confidence` is clamped into `[0, 1]`.
    pub fn new(content: impl Into<String>, explanation: impl Into<String>, confidence: f64) -> Self {
        Self {
            content: content.into(),
            explanation: explanation.into(),
            confidence: clamp_confidence(confidence),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Clamp a raw score into `[0, 1]`. NaN maps to the default.
pub fn clamp_confidence(raw: f64) -> f64 {
    if raw.is_nan() {
        return DEFAULT_CONFIDENCE;
    }
    raw.clamp(0.0, 1.0)
}

/// Reply suggestions plus a short read of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    suggestions: Vec<ReplySuggestion>,
    context_analysis: String,
    emotion_tone: String,
    conversation_summary: String,
}

impl AnalysisResult {
    pub fn new(
        suggestions: Vec<ReplySuggestion>,
        context_analysis: impl Into<String>,
        emotion_tone: impl Into<String>,
        conversation_summary: impl Into<String>,
    ) -> Self {
        Self {
            suggestions,
            context_analysis: context_analysis.into(),
            emotion_tone: emotion_tone.into(),
            conversation_summary: conversation_summary.into(),
        }
    }

    pub fn suggestions(&self) -> &[ReplySuggestion] {
        &self.suggestions
    }

    pub fn context_analysis(&self) -> &str {
        &self.context_analysis
    }

    pub fn emotion_tone(&self) -> &str {
        &self.emotion_tone
    }

    pub fn conversation_summary(&self) -> &str {
        &self.conversation_summary
    }
}
