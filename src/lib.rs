//! # gemini-chat-adapter
//!
//! Google Gemini `generateContent` adapter for chat-completion style
//! orchestration frameworks.
//!
//! ## Overview
//!
//! The adapter turns a conversation and an optional tool list into a single
//! Gemini request, and turns the reply back into one assistant [`Message`].
//! When the model asks for a function call, the matching [`tools::Tool`] is
//! run, its result is appended to the conversation, and the model is asked
//! again, up to a configurable number of tool rounds.
//!
//! - The conversation is flattened into one prompt; only system messages are
//!   labelled (`System: ...`).
//! - Tool parameter schemas are translated one level deep.
//! - Function calling runs in `AUTO` mode.
//! - Streaming is emulated with a one-item stream.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemini_chat_adapter::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> gemini_chat_adapter::Result<()> {
//!     let client = GeminiChatClient::new("gemini-1.5-flash", "your-api-key")?;
//!
//!     let messages = vec![
//!         Message::system("Answer in one sentence."),
//!         Message::user("Why is the sky blue?", "user"),
//!     ];
//!
//!     let reply = client.complete(&messages, &[]).await?;
//!     println!("{}", reply.content);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder and configuration |
//! | [`drivers`] | Gemini request/response translation |
//! | [`facade`] | Host-framework chat-completion trait |
//! | [`tools`] | Executable tools and lookup helpers |
//! | [`transport`] | HTTP transport |
//! | [`types`] | Messages, tool definitions, usage reports |
//! | [`tokens`] | Token counting approximation |

pub mod client;
pub mod drivers;
pub mod facade;
pub mod tokens;
pub mod tools;
pub mod transport;
pub mod types;

pub use client::{ClientConfig, Completion, GeminiChatClient, GeminiClientBuilder};
pub use facade::chat::ChatCompletionClient;
pub use facade::prelude;
pub use types::{
    message::{Message, MessageRole},
    tool::{FunctionCall, ToolDefinition},
};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
