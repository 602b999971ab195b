use crate::booking::{FormField, WizardStep};
use crate::cli::commands::join_args;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("name", "Enter name and surname", "name [text]", cmd_name),
        CommandEntry::new("email", "Enter an email address", "email [address]", cmd_email),
        CommandEntry::new("phone", "Enter a phone number", "phone [number]", cmd_phone),
        CommandEntry::new(
            "submit",
            "Validate contact details and confirm the booking",
            "submit",
            cmd_submit,
        ),
    ]
}

fn cmd_name(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    set_field(context, FormField::Name, args)
}

fn cmd_email(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    set_field(context, FormField::Email, args)
}

fn cmd_phone(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    set_field(context, FormField::Phone, args)
}

fn set_field(context: &mut ShellContext, field: FormField, args: &[&str]) -> CommandResult {
    context.wizard().ensure_step(WizardStep::Contact)?;
    let value = if args.is_empty() {
        let current = context.wizard().form().value(field).to_string();
        context.prompt_text(field.label(), &current)?
    } else {
        join_args(args)
    };
    context.wizard.set_contact_field(field, value.clone())?;
    output::info(format!("{field}: {value}"));
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.wizard.submit()?;
    Ok(())
}
