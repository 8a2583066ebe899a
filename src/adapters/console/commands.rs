//! Console command parsing.
//!
//! Lines starting with `/` are commands; anything else is an utterance
//! for the assistant.

/// A parsed console input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand<'a> {
    /// Show the session list grouped by category.
    List,
    /// Show the session statistics line.
    Stats,
    /// Export the session list to a text file.
    Export,
    /// Clear the session list after confirmation.
    Clear,
    /// Look up one item without adding it to the list.
    Find(&'a str),
    Help,
    Quit,
    /// A `/command` that is not recognized.
    Unknown(&'a str),
    /// Free text for the assistant.
    Utterance(&'a str),
}

pub const HELP: &str = "Commands:\n  \
    /list          show your shopping list\n  \
    /stats         show item and category counts\n  \
    /find <item>   look up one item without adding it\n  \
    /export        save your list to a text file\n  \
    /clear         start a new list\n  \
    /quit          leave the store\n\
    Anything else is read as a request, e.g. \"I need apples and milk\".";

/// Parses one input line.
pub fn parse_command(line: &str) -> ConsoleCommand<'_> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return ConsoleCommand::Utterance(line);
    };

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "list" => ConsoleCommand::List,
        "stats" => ConsoleCommand::Stats,
        "export" | "print" => ConsoleCommand::Export,
        "clear" | "new" => ConsoleCommand::Clear,
        "find" if !argument.is_empty() => ConsoleCommand::Find(argument),
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(line),
    }
}

/// Returns true for an affirmative answer to a y/N prompt.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
