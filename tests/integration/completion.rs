//! Plain completions against a mocked generateContent endpoint

use crate::integration::mock_server::{text_response, MockServerFixture};
use gemini_chat_adapter::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_single_remote_call_without_tools() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_generate(
            Matcher::Regex(r#""text":"System: Be terse\.\\n\\nHi\\n\\nHello!\\n\\nHow are you\?\\n\\n""#.into()),
            text_response("hello"),
            1,
        )
        .await;

    let client = fixture.client();
    let messages = vec![
        Message::system("Be terse."),
        Message::user("Hi", "user"),
        Message::assistant("Hello!"),
        Message::user("How are you?", "user"),
    ];
    let reply = client.complete(&messages, &[]).await.unwrap();

    assert_eq!(reply, Message::assistant("hello"));
    assert_eq!(reply.source(), Some("assistant"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_without_tools_has_no_tool_config() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_generate(
            Matcher::Json(json!({
                "contents": [{"role": "user", "parts": [{"text": "Ping\n\n"}]}]
            })),
            text_response("pong"),
            1,
        )
        .await;

    let reply = fixture
        .client()
        .complete(&[Message::user("Ping", "user")], &[])
        .await
        .unwrap();
    assert_eq!(reply.content, "pong");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_text_yields_empty_assistant_message() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_generate(
            Matcher::Any,
            json!({"candidates": [{"content": {"parts": [], "role": "model"}, "finishReason": "SAFETY"}]}),
            1,
        )
        .await;

    let completion = fixture
        .client()
        .complete_with_history(&[Message::user("Tell me a secret", "user")], &[])
        .await
        .unwrap();
    assert_eq!(completion.message, Message::assistant(""));
    assert_eq!(completion.finish_reason.as_deref(), Some("content_filter"));
}

#[tokio::test]
async fn test_blocked_prompt_yields_empty_assistant_message() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_generate(
            Matcher::Any,
            json!({"promptFeedback": {"blockReason": "SAFETY"}}),
            1,
        )
        .await;

    let reply = fixture
        .client()
        .complete(&[Message::user("...", "user")], &[])
        .await
        .unwrap();
    assert_eq!(reply.content, "");
    assert_eq!(reply.source(), Some("assistant"));
}

#[tokio::test]
async fn test_completion_carries_usage_and_transcript() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_generate(Matcher::Any, text_response("ok"), 1).await;

    let messages = vec![Message::user("Hi", "user")];
    let completion = fixture
        .client()
        .complete_with_history(&messages, &[])
        .await
        .unwrap();
    assert_eq!(completion.remote_calls, 1);
    assert_eq!(completion.tool_rounds, 0);
    assert_eq!(completion.messages, messages);
    assert_eq!(completion.usage.map(|u| u.total_tokens), Some(10));
}

#[tokio::test]
async fn test_generation_config_is_forwarded() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_generate(
            Matcher::PartialJson(json!({
                "generationConfig": {"temperature": 0.25, "maxOutputTokens": 64}
            })),
            text_response("ok"),
            1,
        )
        .await;

    let client = fixture
        .builder()
        .temperature(0.25)
        .max_output_tokens(64)
        .build()
        .unwrap();
    client.complete(&[Message::user("Hi", "user")], &[]).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_conversation_is_rejected_without_remote_call() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_generate(Matcher::Any, text_response("unused"), 0).await;

    let err = fixture.client().complete(&[], &[]).await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    mock.assert_async().await;
}
