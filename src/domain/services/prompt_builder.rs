use crate::domain::{ChatMessage, ReplyStyle};

/// System message sent alongside every analysis prompt.
pub const SYSTEM_PROMPT: &str = "You are a professional chat reply assistant, skilled at \
analysing conversation context and suggesting fitting replies.";

/// Render the transcript as `"<label>: <content>"` lines in conversation order.
pub fn format_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.sender().label(), m.content()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user prompt asking the model for an analysis and three replies.
pub fn build_prompt(transcript: &str, style: ReplyStyle, context_info: Option<&str>) -> String {
    let profile = style.profile();

    let context_line = match context_info.map(str::trim) {
        Some(info) if !info.is_empty() => format!("Additional context: {info}\n"),
        _ => String::new(),
    };

    format!(
        "\
You are a professional chat reply assistant. Help the user understand the conversation \
below and suggest what they could send next.

Chat history:
{transcript}

{context_line}Reply style: {name} - {description}
{instruction}

Analyse the following:
1. The emotional tone and atmosphere of the conversation
2. The intent and expectation behind the last message from Them
3. The current topic and its background
4. A suitable direction for the reply

Then write 3 different reply suggestions. Each suggestion must include:
- the exact reply text
- the reason for choosing this reply
- how suitable the reply is (a score from 0 to 1)

Return the result as JSON:
{{
    \"context_analysis\": \"analysis of the conversation context\",
    \"emotion_tone\": \"emotional tone\",
    \"conversation_summary\": \"summary of the conversation\",
    \"suggestions\": [
        {{
            \"content\": \"reply text\",
            \"explanation\": \"reason for this reply\",
            \"confidence\": 0.9
        }}
    ]
}}
",
        name = profile.name,
        description = profile.description,
        instruction = profile.instruction,
    )
}
