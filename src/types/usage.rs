//! Usage and capability reports handed to the host framework.
//!
//! Gemini usage is not tracked across calls, so these reports are fixed. Fields
//! are `Option` so "not reported" stays distinguishable from a real zero, while
//! the serialized form is the empty mapping the host expects.

use serde::{Deserialize, Serialize};

/// Per-request usage report. Always empty for this client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<u64>,
}

impl RequestUsage {
    pub fn is_reported(&self) -> bool {
        self.prompt_tokens.is_some() || self.completion_tokens.is_some()
    }
}

/// Cumulative usage report. Always zero for this client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalUsage {
    pub used: u64,
    pub total: u64,
}

/// Model capability report. No capability is advertised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_calling: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_output: Option<bool>,
}
