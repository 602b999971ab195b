use crate::booking::WizardStep;
use crate::cli::commands::usage;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::view;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "next",
            "Continue to the next step when the current one is complete",
            "next",
            cmd_next,
        ),
        CommandEntry::new("back", "Return to the previous step", "back", cmd_back),
        CommandEntry::new(
            "step",
            "Jump back to an earlier step",
            "step <1|2|3>",
            cmd_step,
        ),
        CommandEntry::new(
            "summary",
            "Show the booking so far",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "status",
            "Show the current step and what it still needs",
            "status",
            cmd_status,
        ),
        CommandEntry::new(
            "restart",
            "Discard the booking and start over",
            "restart",
            cmd_restart,
        ),
    ]
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.wizard.advance_step()?;
    Ok(())
}

fn cmd_back(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.wizard().step() == WizardStep::Service {
        output::warning("Already at the first step.");
        return Ok(());
    }
    context.wizard.retreat_step()?;
    Ok(())
}

fn cmd_step(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = args
        .first()
        .and_then(|raw| raw.trim().parse::<u8>().ok())
        .and_then(WizardStep::from_number)
        .filter(|step| *step != WizardStep::Success)
        .ok_or_else(|| usage("step <1|2|3>"))?;
    context.wizard.return_to_step(target)?;
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    view::print_summary(&context.wizard().summary());
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let wizard = context.wizard();
    let step = wizard.step();
    output::info(format!("Current: {}", view::step_heading(step)));
    let needs = match step {
        WizardStep::Service if !wizard.state().has_service_and_provider() => {
            Some("choose a service and a provider")
        }
        WizardStep::Schedule if !wizard.state().has_date_and_time() => {
            Some("choose a date and a free time")
        }
        WizardStep::Contact if !wizard.can_advance() => {
            Some("fill in valid contact details and submit")
        }
        _ => None,
    };
    match (step, needs) {
        (WizardStep::Success, _) => output::info("The booking is confirmed."),
        (_, Some(needs)) => output::info(format!("Still needed: {needs}.")),
        (WizardStep::Contact, None) => output::hint("Ready: type `submit` to confirm."),
        (_, None) => output::hint("Ready: type `next` to continue."),
    }
    view::print_summary(&wizard.summary());
    Ok(())
}

fn cmd_restart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let in_progress = context.wizard().step() != WizardStep::Success
        && context.wizard().state().service().is_some();
    if in_progress && !context.confirm("Discard the current booking?")? {
        output::info("Restart cancelled.");
        return Ok(());
    }
    context.wizard.restart();
    Ok(())
}
