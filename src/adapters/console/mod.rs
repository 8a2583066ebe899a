//! Console adapter - terminal commands and wording for assistant replies.

mod commands;
mod renderer;

pub use commands::{is_confirmation, parse_command, ConsoleCommand, HELP};
pub use renderer::{
    render_export, render_list, render_reply, render_resolution, render_stats, WELCOME,
};
