//! Application layer - Orchestrates domain operations for callers.
//!
//! `ShoppingAssistant` is the only surface presentation, export and CLI
//! code is expected to call.

mod assistant;
mod errors;
mod reply;

pub use assistant::ShoppingAssistant;
pub use errors::StartupError;
pub use reply::AssistantReply;
