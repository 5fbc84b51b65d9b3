use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{AnalysisResult, ReplySuggestion, DEFAULT_CONFIDENCE};

pub const FALLBACK_REPLY: &str = "Sorry, I need a bit more information to suggest a good reply.";
pub const FALLBACK_EXPLANATION: &str = "The AI analysis ran into a problem; please try again.";
pub const FALLBACK_CONFIDENCE: f64 = 0.3;
pub const FALLBACK_CONTEXT_ANALYSIS: &str = "A problem occurred during analysis";
pub const FALLBACK_EMOTION_TONE: &str = "Neutral";
pub const FALLBACK_SUMMARY: &str = "Could not complete analysis";

/// Shape the model is asked to produce. Every field is optional; `null`
/// counts as absent.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    suggestions: Option<Vec<RawSuggestion>>,
    #[serde(default)]
    context_analysis: Option<String>,
    #[serde(default)]
    emotion_tone: Option<String>,
    #[serde(default)]
    conversation_summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
}

impl From<RawAnalysis> for AnalysisResult {
    fn from(raw: RawAnalysis) -> Self {
        let suggestions = raw
            .suggestions
            .unwrap_or_default()
            .into_iter()
            .map(|s| {
                ReplySuggestion::new(
                    s.content.unwrap_or_default(),
                    s.explanation.unwrap_or_default(),
                    s.confidence.unwrap_or(DEFAULT_CONFIDENCE),
                )
            })
            .collect();

        AnalysisResult::new(
            suggestions,
            raw.context_analysis.unwrap_or_default(),
            raw.emotion_tone.unwrap_or_default(),
            raw.conversation_summary.unwrap_or_default(),
        )
    }
}

/// The degraded result returned whenever the model output can't be read.
pub fn fallback_result() -> AnalysisResult {
    AnalysisResult::new(
        vec![ReplySuggestion::new(
            FALLBACK_REPLY,
            FALLBACK_EXPLANATION,
            FALLBACK_CONFIDENCE,
        )],
        FALLBACK_CONTEXT_ANALYSIS,
        FALLBACK_EMOTION_TONE,
        FALLBACK_SUMMARY,
    )
}

/// Interpret raw model text as an analysis.
///
/// Never fails: text that is not a JSON object of the expected shape yields
/// [`fallback_result`]. Prose or markdown fences around the object are
/// tolerated.
pub fn normalize(raw_text: &str) -> AnalysisResult {
    match parse_analysis(raw_text) {
        Some(raw) => {
            debug!(
                "Parsed model response with {} suggestion(s)",
                raw.suggestions.as_ref().map_or(0, Vec::len)
            );
            raw.into()
        }
        None => {
            warn!(
                "Could not parse model response as analysis JSON ({} bytes), using fallback",
                raw_text.len()
            );
            debug!("Unparsed model response: {raw_text}");
            fallback_result()
        }
    }
}

fn parse_analysis(text: &str) -> Option<RawAnalysis> {
    let trimmed = text.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return from_object(value);
    }

    // Not JSON as a whole: extract the outermost object from the response.
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    let value = serde_json::from_str::<Value>(&trimmed[start..=end]).ok()?;
    from_object(value)
}

fn from_object(value: Value) -> Option<RawAnalysis> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_fallback(result: &AnalysisResult) {
        assert_eq!(result, &fallback_result());
        assert_eq!(result.suggestions().len(), 1);
        assert_eq!(result.suggestions()[0].content(), FALLBACK_REPLY);
        assert_eq!(result.suggestions()[0].confidence(), 0.3);
        assert_eq!(result.emotion_tone(), FALLBACK_EMOTION_TONE);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let result =
            normalize(r#"{"suggestions":[{"content":"ok"}], "emotion_tone":"happy"}"#);

        assert_eq!(result.suggestions().len(), 1);
        let suggestion = &result.suggestions()[0];
        assert_eq!(suggestion.content(), "ok");
        assert_eq!(suggestion.explanation(), "");
        assert_eq!(suggestion.confidence(), 0.5);
        assert_eq!(result.emotion_tone(), "happy");
        assert_eq!(result.context_analysis(), "");
        assert_eq!(result.conversation_summary(), "");
    }

    #[test]
    fn test_confidence_clamped_into_unit_interval() {
        let result = normalize(
            r#"{"suggestions":[
                {"content":"a","explanation":"x","confidence":1.7},
                {"content":"b","explanation":"y","confidence":-0.2},
                {"content":"c","explanation":"z","confidence":1}
            ]}"#,
        );
        let confidences: Vec<f64> = result.suggestions().iter().map(|s| s.confidence()).collect();
        assert_eq!(confidences, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_full_response_keeps_order() {
        let result = normalize(
            r#"{
                "context_analysis": "planning dinner",
                "emotion_tone": "upbeat",
                "conversation_summary": "friend asks about tonight",
                "suggestions": [
                    {"content": "Sure!", "explanation": "direct", "confidence": 0.9},
                    {"content": "Maybe later?", "explanation": "hedge", "confidence": 0.6},
                    {"content": "Can't tonight", "explanation": "decline", "confidence": 0.4}
                ]
            }"#,
        );
        let contents: Vec<&str> = result.suggestions().iter().map(|s| s.content()).collect();
        assert_eq!(contents, vec!["Sure!", "Maybe later?", "Can't tonight"]);
        assert_eq!(result.context_analysis(), "planning dinner");
        assert_eq!(result.conversation_summary(), "friend asks about tonight");
    }

    #[test]
    fn test_missing_suggestions_is_empty_not_fallback() {
        let result = normalize(r#"{"emotion_tone":"calm"}"#);
        assert!(result.suggestions().is_empty());
        assert_eq!(result.emotion_tone(), "calm");
    }

    #[test]
    fn test_null_fields_treated_as_absent() {
        let result = normalize(
            r#"{"suggestions":[{"content":null,"confidence":null}],"context_analysis":null}"#,
        );
        assert_eq!(result.suggestions()[0].content(), "");
        assert_eq!(result.suggestions()[0].confidence(), 0.5);
        assert_eq!(result.context_analysis(), "");
    }

    #[test]
    fn test_non_json_falls_back() {
        assert_is_fallback(&normalize("not json at all"));
    }

    #[test]
    fn test_empty_text_falls_back() {
        assert_is_fallback(&normalize(""));
    }

    #[test]
    fn test_non_object_json_falls_back() {
        assert_is_fallback(&normalize(r#"["just", "an", "array"]"#));
        assert_is_fallback(&normalize("[]"));
        assert_is_fallback(&normalize(r#"[{"emotion_tone":"calm"}]"#));
    }

    #[test]
    fn test_wrongly_typed_fields_fall_back() {
        assert_is_fallback(&normalize(r#"{"suggestions":[{"confidence":"high"}]}"#));
        assert_is_fallback(&normalize(r#"{"suggestions":"none"}"#));
    }

    #[test]
    fn test_tolerates_code_fences_and_prose() {
        let text = "Here is the analysis:\n```json\n{\"emotion_tone\":\"warm\",\"suggestions\":[{\"content\":\"hi\"}]}\n```";
        let result = normalize(text);
        assert_eq!(result.emotion_tone(), "warm");
        assert_eq!(result.suggestions()[0].content(), "hi");
    }
}
