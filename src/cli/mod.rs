pub mod commands;
pub mod context;
pub mod errors;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod view;

pub use context::{CliMode, ShellContext};
pub use errors::{CliError, CommandError};
pub use shell::run_cli;
