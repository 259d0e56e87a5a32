//! # Types Module
//!
//! Strongly-typed representations of what crosses the host boundary.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role, content and source label |
//! | [`MessageRole`] | System, user, assistant or function |
//! | [`ToolDefinition`] | Tool name, description and parameter schema |
//! | [`FunctionCall`] | Tool invocation requested by the model |
//! | [`RequestUsage`], [`TotalUsage`], [`ModelCapabilities`] | Host-facing reports |
//!
//! ## Example
//!
//! ```rust
//! use gemini_chat_adapter::types::{Message, ToolDefinition};
//!
//! let system = Message::system("You are a helpful assistant");
//! let user = Message::user("What's the weather?", "user");
//!
//! let tool = ToolDefinition::new(
//!     "get_weather",
//!     "Get current weather for a location",
//!     serde_json::json!({
//!         "type": "object",
//!         "properties": {
//!             "location": {"type": "string"}
//!         },
//!         "required": ["location"]
//!     }),
//! );
//! ```

pub mod message;
pub mod tool;
pub mod usage;

pub use message::{Message, MessageRole};
pub use tool::{FunctionCall, ToolDefinition};
pub use usage::{ModelCapabilities, RequestUsage, TotalUsage};
