//! Gemini chat client.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod config;
pub mod core;

pub use self::builder::GeminiClientBuilder;
pub use self::config::ClientConfig;
pub use self::core::{Completion, GeminiChatClient};
