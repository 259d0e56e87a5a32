//! Token counter implementations.

use crate::types::Message;

pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;

    fn count_messages(&self, messages: &[Message]) -> usize {
        messages.iter().map(|m| self.count(&m.content)).sum()
    }
}

/// Counts whitespace-separated words. An approximation, not a tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceCounter;

impl WhitespaceCounter {
    pub fn new() -> Self {
        Self
    }
}

impl TokenCounter for WhitespaceCounter {
    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}
