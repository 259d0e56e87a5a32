use async_trait::async_trait;
use futures::stream;
use std::sync::Arc;

use crate::client::GeminiChatClient;
use crate::tokens::{TokenCounter, REMAINING_TOKENS};
use crate::tools::Tool;
use crate::types::message::Message;
use crate::types::usage::{ModelCapabilities, RequestUsage, TotalUsage};
use crate::{BoxStream, Result};

/// Chat-completion interface expected by the host orchestration framework.
///
/// Only [`complete`](ChatCompletionClient::complete) does real work. The
/// remaining methods exist so an implementation can stand in for any other
/// client; `create` and `create_stream` delegate to `complete`.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    /// Produce one assistant reply, resolving any tool invocations first.
    async fn complete(&self, messages: &[Message], tools: &[Arc<dyn Tool>]) -> Result<Message>;

    async fn create(&self, messages: &[Message], tools: &[Arc<dyn Tool>]) -> Result<Message> {
        self.complete(messages, tools).await
    }

    /// A stream with exactly one item: the full completion.
    fn create_stream<'a>(
        &'a self,
        messages: &'a [Message],
        tools: &'a [Arc<dyn Tool>],
    ) -> BoxStream<'a, Message> {
        Box::pin(stream::once(self.complete(messages, tools)))
    }

    fn actual_usage(&self) -> RequestUsage;

    fn total_usage(&self) -> TotalUsage;

    fn capabilities(&self) -> ModelCapabilities;

    fn count_tokens(&self, text: &str) -> usize;

    fn remaining_tokens(&self) -> usize;

    fn model_info(&self) -> String;
}

#[async_trait]
impl ChatCompletionClient for GeminiChatClient {
    async fn complete(&self, messages: &[Message], tools: &[Arc<dyn Tool>]) -> Result<Message> {
        GeminiChatClient::complete(self, messages, tools).await
    }

    fn actual_usage(&self) -> RequestUsage {
        RequestUsage::default()
    }

    fn total_usage(&self) -> TotalUsage {
        TotalUsage::default()
    }

    fn capabilities(&self) -> ModelCapabilities {
        ModelCapabilities::default()
    }

    fn count_tokens(&self, text: &str) -> usize {
        self.counter.count(text)
    }

    fn remaining_tokens(&self) -> usize {
        REMAINING_TOKENS
    }

    fn model_info(&self) -> String {
        format!("Gemini model: {}", self.model)
    }
}
