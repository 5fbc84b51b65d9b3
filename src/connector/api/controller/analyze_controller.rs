use anyhow::{Context, Result};
use serde_json::Value;
use tokio::io::AsyncReadExt;

use crate::cli::OutputFormat;
use crate::{AnalysisRequest, AnalysisResult, ReplyStyle};

use super::super::Container;

pub struct AnalyzeController<'a> {
    container: &'a Container,
}

impl<'a> AnalyzeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn analyze(
        &self,
        input: String,
        style: Option<ReplyStyle>,
        context: Option<String>,
        format: OutputFormat,
    ) -> Result<String> {
        let text = read_input(&input).await?;
        let mut request = parse_request(&text)
            .with_context(|| format!("failed to read chat transcript from {input}"))?;

        if let Some(style) = style {
            request = request.with_reply_style(style);
        }
        if let Some(context) = context {
            request = request.with_context_info(context);
        }

        let use_case = self.container.analyze_use_case();
        let result = use_case.execute(&request).await?;

        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&result)?,
            OutputFormat::Text => self.format_analysis(&result),
        })
    }

    fn format_analysis(&self, result: &AnalysisResult) -> String {
        let mut output = format!(
            "Emotion tone: {}\nSummary:      {}\nContext:      {}\n\n",
            display_or_dash(result.emotion_tone()),
            display_or_dash(result.conversation_summary()),
            display_or_dash(result.context_analysis()),
        );

        if result.suggestions().is_empty() {
            output.push_str("No reply suggestions.\n");
            return output;
        }

        output.push_str(&format!("Suggestions ({}):\n\n", result.suggestions().len()));
        for (i, suggestion) in result.suggestions().iter().enumerate() {
            output.push_str(&format!(
                "{}. {} (confidence: {:.2})\n",
                i + 1,
                suggestion.content(),
                suggestion.confidence()
            ));
            if !suggestion.explanation().is_empty() {
                output.push_str(&format!("   Why: {}\n", suggestion.explanation()));
            }
        }

        output
    }
}

fn display_or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

async fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("failed to read stdin")?;
        return Ok(text);
    }

    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("failed to read {input}"))
}

/// Accept either a bare array of messages or a full analysis request object.
fn parse_request(text: &str) -> Result<AnalysisRequest> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_array() {
        return Ok(AnalysisRequest::new(serde_json::from_value(value)?));
    }
    Ok(serde_json::from_value(value)?)
}
