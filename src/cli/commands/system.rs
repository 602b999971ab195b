use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::cli::commands::{join_args, usage};
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::errors::CommandError;
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::ConfigManager;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change the saved configuration",
            "config [show | set <currency|plain|catalog> <value>]",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

const CONFIG_USAGE: &str = "config [show | set <currency|plain|catalog> <value>]";

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None | Some("show") => show_config(context),
        Some("set") => set_config(context, &args[1..]),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`. Usage: {CONFIG_USAGE}"
        ))),
    }
}

/// Writes one setting to the config file. The running session keeps its
/// settings; the saved file applies from the next start.
fn set_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (key, rest) = args.split_first().ok_or_else(|| usage(CONFIG_USAGE))?;
    if rest.is_empty() {
        return Err(usage(CONFIG_USAGE));
    }
    let value = join_args(rest);

    let mut updated = context.config.clone();
    match key.to_lowercase().as_str() {
        "currency" => updated.currency = value,
        "plain" => {
            updated.plain_output = match value.to_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                _ => return Err(usage("config set plain <on|off>")),
            }
        }
        "catalog" => {
            updated.catalog_file = match value.as_str() {
                "none" | "builtin" | "built-in" => None,
                path => {
                    let path = PathBuf::from(path);
                    Catalog::load(&path)?;
                    Some(path)
                }
            }
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown setting `{other}`; expected currency, plain or catalog"
            )))
        }
    }

    let manager = ConfigManager::new()?;
    manager.save(&updated)?;
    tracing::info!(setting = %key, path = %manager.path().display(), "config saved");
    context.config = updated;
    output::success(format!(
        "Saved {key} to {}. It applies from the next start.",
        manager.path().display()
    ));
    Ok(())
}

fn show_config(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    let hours = &config.opening_hours;
    output::section("Configuration");
    output::info(format!("  Currency: {}", config.currency));
    output::info(format!(
        "  Opening hours: {:02}:00-{:02}:00, {} until {:02}:00, closed {}",
        hours.opening_hour,
        hours.closing_hour,
        hours.short_day,
        hours.short_day_closing_hour,
        hours.closed_day
    ));
    output::info(format!("  Slot length: {} min", hours.slot_minutes));
    output::info(format!(
        "  Catalog: {}",
        config
            .catalog_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in".into())
    ));
    output::info(format!(
        "  Plain output: {}",
        if config.plain_output { "on" } else { "off" }
    ));
    match ConfigManager::new() {
        Ok(manager) => output::info(format!("  File: {}", manager.path().display())),
        Err(err) => tracing::warn!(%err, "config location unavailable"),
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Booking Wizard {}", meta.version));
    output::info(format!("  Build hash: {}", meta.git_hash));
    output::info(format!("  Built at:   {}", meta.timestamp));
    output::info(format!("  Profile:    {}", meta.profile));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.command(&command) {
            help::print_command(entry);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
