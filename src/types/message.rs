//! Chat message format shared with the host framework

use serde::{Deserialize, Serialize};

/// Source label stamped on replies produced by the model.
pub const ASSISTANT_SOURCE: &str = "assistant";
/// Source label stamped on tool results fed back into the conversation.
pub const FUNCTION_SOURCE: &str = "function";

/// A single conversation entry.
///
/// System messages carry no `source`; every other role names its sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: text.into(),
            source: None,
        }
    }

    pub fn user(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: text.into(),
            source: Some(source.into()),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: text.into(),
            source: Some(ASSISTANT_SOURCE.to_string()),
        }
    }

    /// A tool result re-submitted to the model.
    pub fn function(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Function,
            content: text.into(),
            source: Some(FUNCTION_SOURCE.to_string()),
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self.role, MessageRole::System)
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Function,
}
