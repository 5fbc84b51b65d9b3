//! Integration tests for Replysmith.
//!
//! These tests drive the analysis use case end to end with the offline mock
//! model standing in for the provider.

use std::sync::Arc;

use replysmith::{
    format_transcript, normalize, AnalysisRequest, AnalyzeChatUseCase, ChatMessage,
    ListStylesUseCase, MockChatClient, ReplyStyle, Sender,
};

const SAMPLE_CHAT: &str = include_str!("fixtures/sample_chat.json");

fn use_case_with(client: Arc<MockChatClient>) -> AnalyzeChatUseCase {
    AnalyzeChatUseCase::new(client)
}

#[tokio::test]
async fn test_fixture_request_round_trip() {
    let request: AnalysisRequest = serde_json::from_str(SAMPLE_CHAT).expect("fixture parses");
    assert_eq!(request.chat_history().len(), 3);
    assert_eq!(request.reply_style(), ReplyStyle::Friendly);

    let client = Arc::new(MockChatClient::new());
    let result = use_case_with(client.clone())
        .execute(&request)
        .await
        .expect("analysis succeeds");

    assert_eq!(result.suggestions().len(), 3);
    for suggestion in result.suggestions() {
        assert!((0.0..=1.0).contains(&suggestion.confidence()));
    }

    let prompt = client.last_request().expect("model was called").user;
    assert!(prompt.contains("Want to grab coffee this weekend?"));
    assert!(prompt.contains("Additional context: An old university friend"));
}

#[tokio::test]
async fn test_malformed_output_never_fails() {
    let replies = [
        "not json at all",
        "",
        "{\"suggestions\": [",
        "[1, 2, 3]",
        "{\"suggestions\": {\"content\": \"x\"}}",
    ];

    for reply in replies {
        let client = Arc::new(MockChatClient::with_reply(reply));
        let result = use_case_with(client)
            .execute(&AnalysisRequest::new(vec![ChatMessage::new(Sender::Other, "hello?")]))
            .await
            .unwrap_or_else(|e| panic!("reply {reply:?} should degrade, got {e}"));

        assert_eq!(result.suggestions().len(), 1, "reply {reply:?}");
        assert_eq!(result.suggestions()[0].confidence(), 0.3);
        assert_eq!(result.emotion_tone(), "Neutral");
    }
}

#[tokio::test]
async fn test_empty_history_rejected_before_model_call() {
    let client = Arc::new(MockChatClient::new());
    let use_case = use_case_with(client.clone());

    for history in [
        vec![],
        vec![ChatMessage::new("me", ""), ChatMessage::new("other", "  \n")],
    ] {
        let err = use_case
            .execute(&AnalysisRequest::new(history))
            .await
            .expect_err("empty history must be rejected");
        assert!(err.is_invalid_input());
    }

    assert_eq!(client.calls(), 0);
}

#[test]
fn test_confidence_defaults_and_clamps() {
    let result = normalize(
        r#"{"suggestions":[{"content":"a","confidence":1.7},{"content":"b","confidence":-0.2},{"content":"c"}]}"#,
    );
    let confidences: Vec<f64> = result.suggestions().iter().map(|s| s.confidence()).collect();
    assert_eq!(confidences, vec![1.0, 0.0, 0.5]);
}

#[test]
fn test_transcript_rendering_order() {
    let text = format_transcript(&[ChatMessage::new("me", "hi"), ChatMessage::new("other", "hey")]);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(Sender::Me.label()));
    assert!(lines[0].ends_with("hi"));
    assert!(lines[1].starts_with(Sender::Other.label()));
    assert!(lines[1].ends_with("hey"));
}

#[test]
fn test_style_catalogue() {
    let styles = ListStylesUseCase::new().execute();
    assert_eq!(styles.len(), 6);
    for style in &styles {
        assert!(ReplyStyle::ALL.contains(&style.value));
        assert!(!style.name.is_empty());
        assert!(!style.description.is_empty());
    }
}
