pub mod contact;
pub mod navigation;
pub mod schedule;
pub mod service;
pub mod system;

use crate::cli::errors::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "services", "service", "providers", "provider", "calendar", "month", "date", "slots", "time",
    "name", "email", "phone", "submit", "next", "back", "step", "summary", "status", "restart",
    "config", "version", "help", "exit",
];

fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(service::definitions());
    commands.extend(schedule::definitions());
    commands.extend(contact::definitions());
    commands.extend(navigation::definitions());
    commands.extend(system::definitions());
    commands
}

/// The full shell command table in wizard order.
pub(crate) fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new(ROOT_COMMAND_ORDER);
    for entry in all_entries() {
        registry.register(entry);
    }
    registry
}

/// Parses a numeric catalog id argument.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<u32, CommandError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidArguments(format!("{what} id must be a number")))
}

/// Joins the remaining arguments back into one free-text value.
pub(crate) fn join_args(args: &[&str]) -> String {
    args.join(" ")
}

pub(crate) fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("Usage: {text}"))
}
