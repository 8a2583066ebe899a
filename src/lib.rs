//! Shelf Finder - Conversational shopping assistant core
//!
//! Turns free-text shopping requests into store shelf locations: classifies
//! the utterance, extracts the requested items, resolves each one against
//! a product catalog and keeps a per-session shopping list.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
