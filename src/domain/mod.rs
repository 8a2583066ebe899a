//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `catalog` - Category -> shelf/items reference data
//! - `resolution` - Tiered term -> location matching
//! - `extraction` - Utterance -> query terms
//! - `intent` - Greeting / farewell / item-request classification
//! - `session` - Per-conversation shopping list aggregate

pub mod catalog;
pub mod extraction;
pub mod foundation;
pub mod intent;
pub mod resolution;
pub mod session;
