//! Host-framework contract: create, create_stream and remote failures

use crate::integration::mock_server::{text_response, MockServerFixture};
use futures::StreamExt;
use gemini_chat_adapter::prelude::*;
use mockito::Matcher;
use std::sync::Arc;

#[tokio::test]
async fn test_create_stream_yields_exactly_one_completion() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_generate(Matcher::Any, text_response("streamed"), 2).await;

    let client: Arc<dyn ChatCompletionClient> = Arc::new(fixture.client());
    let messages = vec![Message::user("Hi", "user")];

    let direct = client.complete(&messages, &[]).await.unwrap();
    let items: Vec<_> = client.create_stream(&messages, &[]).collect().await;

    assert_eq!(items.len(), 1);
    assert_eq!(items.into_iter().next().unwrap().unwrap(), direct);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_delegates_to_complete() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_generate(Matcher::Any, text_response("created"), 1).await;

    let client = fixture.client();
    let reply = ChatCompletionClient::create(&client, &[Message::user("Hi", "user")], &[])
        .await
        .unwrap();
    assert_eq!(reply, Message::assistant("created"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_auth_failure_propagates_as_remote_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error_response(
            400,
            r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#,
        )
        .await;

    let err = fixture
        .client()
        .complete(&[Message::user("Hi", "user")], &[])
        .await
        .unwrap_err();
    match err {
        Error::Remote {
            status,
            class,
            message,
            retryable,
        } => {
            assert_eq!(status, 400);
            assert_eq!(class, "invalid_request");
            assert!(message.starts_with("API key not valid"));
            assert!(!retryable);
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_retryable() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error_response(503, r#"{"error":{"code":503,"message":"The model is overloaded."}}"#)
        .await;

    let err = fixture
        .client()
        .complete(&[Message::user("Hi", "user")], &[])
        .await
        .unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = GeminiChatClient::builder("gemini-test")
        .api_key("k")
        .base_url_override("http://127.0.0.1:1")
        .build()
        .unwrap();
    let err = client
        .complete(&[Message::user("Hi", "user")], &[])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
