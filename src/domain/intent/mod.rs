//! Intent domain module.
//!
//! Decides whether an utterance is small talk or a request for items,
//! before any extraction or resolution runs.

mod classifier;

pub use classifier::{Intent, IntentClassifier, FAREWELL_PHRASES, GREETING_PHRASES};
