//! Host-framework facade.
//!
//! The client itself is provider-specific; this layer exposes it through the
//! generic chat-completion contract the orchestration framework programs against.

pub mod chat;
pub mod prelude;
