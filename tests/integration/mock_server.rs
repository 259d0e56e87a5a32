//! Mock Gemini server setup for integration tests

use gemini_chat_adapter::{GeminiChatClient, GeminiClientBuilder};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const MODEL: &str = "gemini-test";
pub const API_KEY: &str = "test-key";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        init_tracing();
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Builder pointed at the mock server.
    pub fn builder(&self) -> GeminiClientBuilder {
        GeminiChatClient::builder(MODEL)
            .api_key(API_KEY)
            .base_url_override(&self.base_url)
    }

    pub fn client(&self) -> GeminiChatClient {
        self.builder().build().expect("Failed to build client")
    }

    /// Mock a successful generateContent reply for requests whose body matches `body`.
    pub async fn mock_generate(&self, body: Matcher, response: Value, hits: usize) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", GENERATE_PATH)
            .match_header("x-goog-api-key", API_KEY)
            .match_body(body)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(hits)
            .create_async()
            .await
    }

    /// Mock an error response
    pub async fn mock_error_response(&self, status: usize, error_body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", GENERATE_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body)
            .create_async()
            .await
    }
}

pub fn text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 7,
            "candidatesTokenCount": 3,
            "totalTokenCount": 10
        }
    })
}

pub fn function_call_response(name: &str, args: Value) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "functionCall": { "name": name, "args": args } }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
