//! Assistant replies - the outcome of handling one utterance.

use indexmap::IndexMap;

use crate::domain::resolution::ResolutionResult;
use crate::domain::session::{ListStats, MergeOutcome};

/// What the assistant did with an utterance.
///
/// Replies carry data only; wording is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantReply {
    /// Blank input; nothing to answer.
    Ignored,
    /// The user greeted the assistant.
    Greeting,
    /// The user said thanks or goodbye.
    Farewell,
    /// An item request in which no item could be identified.
    NeedsClarification,
    /// Items were identified, resolved and merged into the session list.
    Located {
        /// Results for the terms of this utterance, in mention order.
        results: IndexMap<String, ResolutionResult>,
        outcome: MergeOutcome,
        /// Session statistics after the merge.
        stats: ListStats,
    },
}

impl AssistantReply {
    /// Returns true if the session list may have changed.
    pub fn updates_session(&self) -> bool {
        matches!(self, Self::Located { .. })
    }

    /// Results of this utterance that matched nothing in the catalog.
    pub fn unresolved(&self) -> Vec<&str> {
        match self {
            Self::Located { results, .. } => results
                .iter()
                .filter(|(_, result)| result.is_unknown())
                .map(|(term, _)| term.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}
