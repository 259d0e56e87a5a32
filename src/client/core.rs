use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use crate::drivers::{GeminiDriver, UsageInfo};
use crate::error::{Error, ErrorContext};
use crate::tokens::WhitespaceCounter;
use crate::tools::{self, Tool};
use crate::transport::HttpTransport;
use crate::types::message::Message;
use crate::types::tool::ToolDefinition;
use crate::Result;

/// Chat-completion client for one Gemini model.
///
/// Holds no conversation state: every call is independent. Share it behind an
/// `Arc` if several tasks need it.
pub struct GeminiChatClient {
    pub(crate) model: String,
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) driver: GeminiDriver,
    pub(crate) max_tool_rounds: usize,
    pub(crate) counter: WhitespaceCounter,
}

impl std::fmt::Debug for GeminiChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiChatClient")
            .field("model", &self.model)
            .field("transport", &self.transport)
            .field("max_tool_rounds", &self.max_tool_rounds)
            .finish_non_exhaustive()
    }
}

/// Outcome of a `complete` call, including the extended transcript.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Final assistant reply.
    pub message: Message,
    /// Input messages followed by one function-result message per tool round.
    pub messages: Vec<Message>,
    /// Number of tools executed.
    pub tool_rounds: usize,
    /// Number of generateContent requests sent.
    pub remote_calls: usize,
    /// Usage reported with the final response, if any.
    pub usage: Option<UsageInfo>,
    pub finish_reason: Option<String>,
}

impl GeminiChatClient {
    /// Create a client for `model` authenticated with `api_key`.
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        crate::client::builder::GeminiClientBuilder::new(model)
            .api_key(api_key)
            .build()
    }

    pub fn builder(model: impl Into<String>) -> crate::client::builder::GeminiClientBuilder {
        crate::client::builder::GeminiClientBuilder::new(model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tool_rounds(&self) -> usize {
        self.max_tool_rounds
    }

    /// Complete a conversation and return the assistant reply.
    pub async fn complete(&self, messages: &[Message], tools: &[Arc<dyn Tool>]) -> Result<Message> {
        Ok(self.complete_with_history(messages, tools).await?.message)
    }

    /// Complete a conversation, resolving tool invocations until the model answers.
    ///
    /// `messages` is not modified. Each tool result is appended to a copy that
    /// is re-sent to the model and returned in [`Completion::messages`].
    pub async fn complete_with_history(
        &self,
        messages: &[Message],
        tools: &[Arc<dyn Tool>],
    ) -> Result<Completion> {
        let call_id = Uuid::new_v4();
        let span = tracing::info_span!("gemini_complete", %call_id, model = %self.model);
        self.run_completion(messages, tools).instrument(span).await
    }

    async fn run_completion(
        &self,
        messages: &[Message],
        tools: &[Arc<dyn Tool>],
    ) -> Result<Completion> {
        if messages.is_empty() {
            return Err(Error::validation_with_context(
                "at least one message is required",
                ErrorContext::new()
                    .with_field_path("messages")
                    .with_source("gemini_client"),
            ));
        }
        tools::ensure_unique_names(tools)?;

        let definitions: Vec<ToolDefinition> =
            tools.iter().map(|t| t.definition().clone()).collect();
        let declarations = GeminiDriver::function_declarations(&definitions)?;

        let mut transcript = messages.to_vec();
        let mut tool_rounds = 0usize;
        let mut remote_calls = 0usize;

        loop {
            let prompt = GeminiDriver::render_prompt(&transcript);
            let body = self.driver.build_request(&prompt, &declarations);
            debug!(
                prompt_chars = prompt.len(),
                tools = declarations.len(),
                round = tool_rounds,
                "dispatching generateContent"
            );

            let raw = self.transport.generate_content(&body).await?;
            remote_calls += 1;
            let response = self.driver.parse_response(&raw)?;

            if let Some(usage) = response.usage {
                debug!(
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    total_tokens = usage.total_tokens,
                    "usage reported"
                );
            }

            let Some(call) = response.function_call else {
                let text = response.text.unwrap_or_default();
                if text.is_empty() {
                    warn!(
                        finish_reason = response.finish_reason.as_deref().unwrap_or("none"),
                        "model returned no text; replying with empty content"
                    );
                }
                info!(tool_rounds, remote_calls, "completion finished");
                return Ok(Completion {
                    message: Message::assistant(text),
                    messages: transcript,
                    tool_rounds,
                    remote_calls,
                    usage: response.usage,
                    finish_reason: response.finish_reason,
                });
            };

            let tool = tools::find_tool(tools, &call.name).ok_or_else(|| {
                Error::UnresolvableTool {
                    name: call.name.clone(),
                }
            })?;

            if tool_rounds >= self.max_tool_rounds {
                warn!(
                    tool = %call.name,
                    max_rounds = self.max_tool_rounds,
                    "tool round limit reached"
                );
                return Err(Error::ToolDepthExceeded {
                    max_rounds: self.max_tool_rounds,
                });
            }

            debug!(tool = %call.name, args = %call.args, "executing tool");
            let output = tool
                .run_json(call.args, CancellationToken::new())
                .await
                .map_err(|source| Error::ToolExecution {
                    name: call.name.clone(),
                    source,
                })?;

            transcript.push(Message::function(tools::stringify_result(&output)));
            tool_rounds += 1;
        }
    }
}
