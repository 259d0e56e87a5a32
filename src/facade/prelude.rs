//! Minimal prelude for application code.
//!
//! Goal: reduce import noise without hiding important concepts.

pub use crate::client::{ClientConfig, Completion, GeminiChatClient, GeminiClientBuilder};
pub use crate::facade::chat::ChatCompletionClient;
pub use crate::tools::{tool_fn, Tool};
pub use crate::types::message::{Message, MessageRole};
pub use crate::types::tool::ToolDefinition;
pub use crate::{Error, Result};
