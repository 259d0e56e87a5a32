//! # Token Counting
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`TokenCounter`] | Trait for token counting implementations |
//! | [`WhitespaceCounter`] | Word count approximation used by the chat client |
//!
//! No token budget is enforced; [`REMAINING_TOKENS`] is the fixed figure the
//! client reports to the host.

mod counter;

pub use counter::{TokenCounter, WhitespaceCounter};

/// Remaining-token figure reported to the host framework.
pub const REMAINING_TOKENS: usize = 1024;
