//! Provider driver layer: pure request/response transformations.
//!
//! Drivers never touch the network. They turn the host's messages and tools into
//! a provider request body and turn the provider's JSON reply into a
//! [`DriverResponse`]. The transport layer moves the bytes.

pub mod gemini;

use crate::types::tool::FunctionCall;

pub use gemini::GeminiDriver;

/// Unified reply extracted from one provider response.
#[derive(Debug, Clone)]
pub struct DriverResponse {
    /// Concatenated text of the first candidate, if it has any text parts.
    pub text: Option<String>,
    /// Function call carried by the first part of the first candidate.
    pub function_call: Option<FunctionCall>,
    /// Finish reason normalized to lowercase tokens (`stop`, `length`, `content_filter`).
    pub finish_reason: Option<String>,
    /// Token usage statistics.
    pub usage: Option<UsageInfo>,
}

/// Token usage information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageInfo {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Sampling knobs forwarded to the provider when set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationOptions {
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
}
