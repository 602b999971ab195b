//! Shell state and command dispatch.

use std::env;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::booking::{BookingWizard, WizardStep};
use crate::cli::commands;
use crate::cli::errors::{CliError, CommandError};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::view::{self, TerminalView};
use crate::config::{Config, ConfigManager};
use crate::errors::BookingError;
use crate::time::{Clock, FixedClock, SystemClock};

pub const SCRIPT_ENV: &str = "BOOKING_WIZARD_CLI_SCRIPT";
pub const TODAY_ENV: &str = "BOOKING_WIZARD_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) wizard: BookingWizard,
    pub(crate) config: Config,
    pub(crate) theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new()?.load()?;
        let clock = clock_from_env()?;
        Self::with_parts(mode, config, clock)
    }

    pub fn with_parts(
        mode: CliMode,
        config: Config,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let registry = commands::registry();

        output::set_preferences(OutputPreferences {
            plain_mode: config.plain_output || mode == CliMode::Script,
        });

        let catalog = config.catalog()?;
        let mut wizard = BookingWizard::new(catalog, config.opening_hours.clone(), clock)
            .with_currency(config.currency.clone());
        wizard.subscribe(Box::new(TerminalView::new()));

        Ok(Self {
            mode,
            registry,
            wizard,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub(crate) fn prompt(&self) -> String {
        match self.wizard.step() {
            WizardStep::Success => "booking [done]> ".to_string(),
            step => format!("booking [{}/3]> ", step.number()),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            output::hint(format!("Did you mean `{best}`?"));
        }
    }

    /// Renders the view belonging to the current step.
    pub(crate) fn show_current_step(&self) {
        let wizard = &self.wizard;
        view::print_step(wizard.step());
        match wizard.step() {
            WizardStep::Service => {
                self.show_services();
                self.show_providers();
            }
            WizardStep::Schedule => {
                view::print_lines(&view::calendar_lines(&wizard.calendar()));
                if wizard.state().date().is_some() {
                    view::print_lines(&view::slot_lines(&wizard.time_slots()));
                }
            }
            WizardStep::Contact => view::print_summary(&wizard.summary()),
            WizardStep::Success => {
                view::print_summary(&wizard.summary());
                if let Some(confirmation) = wizard.confirmation() {
                    view::print_confirmation(confirmation);
                }
            }
        }
    }

    pub(crate) fn show_services(&self) {
        let wizard = &self.wizard;
        output::info("Services:");
        view::print_lines(&view::services_lines(
            wizard.catalog(),
            wizard.state().service().map(|service| service.id),
            wizard.currency(),
        ));
    }

    pub(crate) fn show_providers(&self) {
        let wizard = &self.wizard;
        output::info("Providers:");
        view::print_lines(&view::providers_lines(
            &wizard.eligible_providers(),
            wizard.state().provider().map(|provider| provider.id),
        ));
    }

    /// Lets the user pick from `items` with arrow keys. Script mode never
    /// prompts and always yields `None`.
    pub(crate) fn pick(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, CommandError> {
        if self.mode == CliMode::Script || items.is_empty() {
            return Ok(None);
        }
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(CommandError::from)
    }

    /// Reads a line of free text. Script mode yields an empty value.
    pub(crate) fn prompt_text(&self, prompt: &str, current: &str) -> Result<String, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(String::new());
        }
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()
            .map_err(CommandError::from)
    }

    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit the booking wizard?")
            .default(false)
            .interact()
            .map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Booking(BookingError::InvalidForm(_)) => {
                output::warning("Fix the fields above and `submit` again.");
                Ok(())
            }
            CommandError::Booking(BookingError::WrongStep { expected, .. }) => {
                output::error(format!("That is part of {expected}."));
                output::hint("Use `back` or `step <n>` to return to an earlier step.");
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        crate::cli::shell::handle_line(self, line)
    }
}

fn clock_from_env() -> Result<Box<dyn Clock>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) => {
            let today = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                BookingError::InvalidConfig(format!("{TODAY_ENV} must be YYYY-MM-DD"))
            })?;
            Ok(Box::new(FixedClock::new(today)))
        }
        Err(_) => Ok(Box::new(SystemClock)),
    }
}
