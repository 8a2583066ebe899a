//! Plain-text rendering of assistant replies for a terminal.

use crate::application::AssistantReply;
use crate::domain::resolution::ResolutionResult;
use crate::domain::session::{CategoryGrouping, ListStats};
use crate::ports::ExportedList;

use crate::adapters::export::{capitalize, display_category};

pub const WELCOME: &str = "Hello! Welcome to the Smart Supermarket.\n\
    Tell me what you're looking for and I'll point you to the right shelves.";

const GREETING_REPLY: &str = "Hello there! What can I help you find today?";

const FAREWELL_REPLY: &str = "You're very welcome! Have a wonderful shopping trip.";

const CLARIFICATION_REPLY: &str = "I couldn't identify any specific items in your message.\n\
    Could you tell me what you're looking for? For example:\n  \
    - I need apples and milk\n  \
    - Where can I find bread?";

const EMPTY_LIST: &str = "Your shopping list is empty.";

const NOT_IN_INVENTORY: &str = "Sorry, not in our current inventory";

/// Renders a reply, or `None` when there is nothing to print.
pub fn render_reply(reply: &AssistantReply) -> Option<String> {
    match reply {
        AssistantReply::Ignored => None,
        AssistantReply::Greeting => Some(GREETING_REPLY.to_string()),
        AssistantReply::Farewell => Some(FAREWELL_REPLY.to_string()),
        AssistantReply::NeedsClarification => Some(CLARIFICATION_REPLY.to_string()),
        AssistantReply::Located { results, stats, .. } => {
            let grouping = CategoryGrouping::from_results(
                results.iter().map(|(term, result)| (term.as_str(), result)),
            );
            Some(format!(
                "Shelf locations found:\n{}\n{}",
                render_results(&grouping),
                render_stats(stats)
            ))
        }
    }
}

/// Renders one utterance's results, grouped by category in mention order.
fn render_results(grouping: &CategoryGrouping) -> String {
    let mut lines = Vec::new();

    for (category, items) in &grouping.categories {
        lines.push(format!("{} section:", display_category(category)));
        for grouped in items {
            lines.push(format!("  [x] {} -> {}", capitalize(&grouped.item), grouped.shelf));
        }
    }

    if !grouping.not_found.is_empty() {
        lines.push("Items not available:".to_string());
        for item in &grouping.not_found {
            lines.push(format!("  - {} -> {}", capitalize(item), NOT_IN_INVENTORY));
        }
    }

    lines.join("\n")
}

/// Renders the whole session list, sorted by category and item.
pub fn render_list(grouping: &CategoryGrouping) -> String {
    if grouping.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let sorted = grouping.clone().sorted();
    let mut lines = vec![format!("Shopping list ({} items):", sorted.total_items())];

    for (category, items) in &sorted.categories {
        lines.push(format!("{}:", display_category(category).to_uppercase()));
        for grouped in items {
            lines.push(format!("  [x] {:<20} -> {}", capitalize(&grouped.item), grouped.shelf));
        }
    }

    if !sorted.not_found.is_empty() {
        lines.push("NOT AVAILABLE:".to_string());
        for item in &sorted.not_found {
            lines.push(format!("  - {}", capitalize(item)));
        }
    }

    lines.join("\n")
}

/// Renders the one-line session summary.
pub fn render_stats(stats: &ListStats) -> String {
    format!(
        "Items in list: {} | Categories: {}",
        stats.total_items, stats.category_count
    )
}

/// Renders a single resolution, for ad-hoc lookups.
pub fn render_resolution(term: &str, result: &ResolutionResult) -> String {
    if result.is_unknown() {
        format!("{} -> {}", capitalize(term), NOT_IN_INVENTORY)
    } else {
        format!(
            "{} -> {} ({})",
            capitalize(term),
            result.shelf,
            display_category(&result.category)
        )
    }
}

pub fn render_export(exported: &ExportedList) -> String {
    format!(
        "Your shopping list ({} items) has been exported to:\n{}",
        exported.item_count,
        exported.path.display()
    )
}
