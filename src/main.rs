//! Shelf Finder - interactive console entry point
//!
//! Loads configuration and the product catalog, then reads requests from
//! stdin until `/quit` or end of input. Logs go to stderr so they never
//! interleave with replies.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelf_finder::adapters::console::{
    is_confirmation, parse_command, render_export, render_list, render_reply, render_resolution,
    render_stats, ConsoleCommand, HELP, WELCOME,
};
use shelf_finder::adapters::{FileCatalogSource, LexiconAnalyzer, TextFileExporter};
use shelf_finder::application::{ShoppingAssistant, StartupError};
use shelf_finder::config::{AppConfig, LoggingConfig};
use shelf_finder::ports::ExportError;

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Shelf finder stopped");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(logging.env_filter());
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn run(config: &AppConfig) -> Result<(), StartupError> {
    let source = FileCatalogSource::new(config.catalog.path());
    let mut assistant = ShoppingAssistant::from_source(&source, Arc::new(LexiconAnalyzer::new()))?;
    let exporter = TextFileExporter::new(config.export.directory());

    tracing::info!(
        session_id = %assistant.session().session_id(),
        categories = assistant.catalog().len(),
        "Session started"
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n", WELCOME)?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let output = match parse_command(&line) {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Utterance(text) => render_reply(&assistant.handle(text)),
            ConsoleCommand::List => Some(render_list(&assistant.group_session_by_category())),
            ConsoleCommand::Stats => Some(render_stats(&assistant.session_stats())),
            ConsoleCommand::Find(item) => Some(render_resolution(item, &assistant.resolve(item))),
            ConsoleCommand::Help => Some(HELP.to_string()),
            ConsoleCommand::Unknown(command) => {
                Some(format!("Unknown command {}. Type /help for a list.", command))
            }
            ConsoleCommand::Export => Some(match assistant.export_session(&exporter) {
                Ok(exported) => render_export(&exported),
                Err(ExportError::EmptyList) => {
                    "Your shopping list is empty. Add some items first!".to_string()
                }
                Err(e) => format!("Export failed: {}", e),
            }),
            ConsoleCommand::Clear => {
                if assistant.session().is_empty() {
                    Some("Your shopping list is already empty.".to_string())
                } else {
                    write!(stdout, "Start a new list? This empties your shopping list. [y/N] ")?;
                    stdout.flush()?;
                    let answer = lines.next().transpose()?.unwrap_or_default();
                    if is_confirmation(&answer) {
                        assistant.clear_session();
                        Some(format!("New list started.\n{}", WELCOME))
                    } else {
                        Some("Kept your shopping list.".to_string())
                    }
                }
            }
        };

        if let Some(output) = output {
            writeln!(stdout, "{}\n", output)?;
        }
    }

    let stats = assistant.session_stats();
    tracing::info!(
        session_id = %assistant.session().session_id(),
        total_items = stats.total_items,
        "Session ended"
    );
    writeln!(stdout, "Goodbye! Happy shopping.")?;
    Ok(())
}
