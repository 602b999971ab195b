use std::{
    borrow::Cow,
    env,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::context::{CliMode, LoopControl, ShellContext, SCRIPT_ENV};
use crate::cli::errors::{CliError, CommandError};
use crate::cli::output;

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    tracing::debug!(?mode, "booking shell started");
    context.show_current_step();

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    while context.running {
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Goodbye.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

pub(crate) fn handle_line(
    context: &mut ShellContext,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let tokens = parse_command_line(line)?;
    let Some(raw) = tokens.first() else {
        return Ok(LoopControl::Continue);
    };

    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
    tracing::debug!(%command, args = args.len(), "dispatching");

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, CommandError> {
    split(input).map_err(|err| CommandError::InvalidArguments(format!("Could not parse input: {err}")))
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only the command word completes; arguments are free-form.
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();
        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::booking::WizardStep;
    use crate::config::Config;
    use crate::time::FixedClock;

    fn script_context() -> ShellContext {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        ShellContext::with_parts(
            CliMode::Script,
            Config::default(),
            Box::new(FixedClock::new(today)),
        )
        .expect("context")
    }

    fn run(context: &mut ShellContext, lines: &[&str]) {
        for line in lines {
            if let Err(err) = context.process_line(line) {
                context.report_error(err).expect("report");
            }
        }
    }

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens = parse_command_line(r#"name "Jan Novák""#).unwrap();
        assert_eq!(tokens, vec!["name", "Jan Novák"]);
    }

    #[test]
    fn unbalanced_quotes_are_rejected() {
        let err = parse_command_line(r#"name "Jan"#).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let mut context = script_context();
        let control = context.process_line("   ").unwrap();
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(context.wizard().step(), WizardStep::Service);
    }

    #[test]
    fn commands_are_case_insensitive() {
        let mut context = script_context();
        run(&mut context, &["SERVICE 1", "Provider 2"]);
        assert!(context.wizard().state().has_service_and_provider());
    }

    #[test]
    fn full_booking_reaches_success() {
        let mut context = script_context();
        run(
            &mut context,
            &[
                "service 1",
                "provider 1",
                "next",
                "date 19",
                "time 10:00",
                "next",
                "name Jan Novák",
                "email jan@example.cz",
                "phone +420 123 456 789",
                "submit",
            ],
        );
        let wizard = context.wizard();
        assert_eq!(wizard.step(), WizardStep::Success);
        let confirmation = wizard.confirmation().expect("confirmed");
        assert_eq!(confirmation.contact.name, "Jan Novák");
        assert_eq!(confirmation.contact.phone, "+420 123 456 789");
    }

    #[test]
    fn invalid_contact_keeps_contact_step() {
        let mut context = script_context();
        run(
            &mut context,
            &[
                "service 2",
                "provider 2",
                "next",
                "date 2026-10-20",
                "time 11:00",
                "next",
                "name Jan",
                "email nope",
                "submit",
            ],
        );
        assert_eq!(context.wizard().step(), WizardStep::Contact);
        assert!(context.wizard().confirmation().is_none());
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut context = script_context();
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn completion_only_covers_command_word() {
        let helper = CommandHelper::new(vec!["services", "service", "summary"]);
        let history = DefaultHistory::new();
        let ctx = ReadlineContext::new(&history);
        let (start, pairs) = helper.complete("ser", 3, &ctx).unwrap();
        assert_eq!(start, 0);
        assert_eq!(pairs.len(), 2);
        let (_, pairs) = helper.complete("service 1", 9, &ctx).unwrap();
        assert!(pairs.is_empty());
    }
}
