use chrono::NaiveDate;

use crate::cli::commands::usage;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::errors::CommandError;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::view;
use crate::render::format_date;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "calendar",
            "Show the visible calendar month",
            "calendar",
            cmd_calendar,
        ),
        CommandEntry::new(
            "month",
            "Page the calendar forward or back",
            "month <next|prev>",
            cmd_month,
        ),
        CommandEntry::new(
            "date",
            "Choose a day of the visible month or a full date",
            "date [day|YYYY-MM-DD]",
            cmd_date,
        ),
        CommandEntry::new(
            "slots",
            "List time slots of the chosen date",
            "slots",
            cmd_slots,
        ),
        CommandEntry::new("time", "Choose a free time slot", "time [HH:MM]", cmd_time),
    ]
}

fn cmd_calendar(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let wizard = context.wizard();
    view::print_lines(&view::calendar_lines(&wizard.calendar()));
    Ok(())
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let direction = args
        .first()
        .map(|raw| raw.to_lowercase())
        .ok_or_else(|| usage("month <next|prev>"))?;
    match direction.as_str() {
        "next" | "+" => {
            context.wizard.next_month()?;
        }
        "prev" | "previous" | "-" => {
            if !context.wizard.previous_month()? {
                output::warning("The calendar cannot go before the current month.");
            }
        }
        _ => return Err(usage("month <next|prev>")),
    }
    Ok(())
}

fn parse_date_arg(context: &ShellContext, raw: &str) -> Result<NaiveDate, CommandError> {
    let raw = raw.trim();
    if raw.contains('-') {
        return NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| CommandError::InvalidArguments("Use YYYY-MM-DD format".into()));
    }
    let day: u32 = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments("Give a day number or YYYY-MM-DD".into()))?;
    let month = context.wizard().state().visible_month();
    month.day(day).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "{} has no day {}",
            context.wizard().calendar().label,
            day
        ))
    })
}

fn cmd_date(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let date = match args.first() {
        Some(raw) => parse_date_arg(context, raw)?,
        None => {
            let calendar = context.wizard().calendar();
            let days: Vec<NaiveDate> = calendar
                .days
                .iter()
                .filter(|cell| !cell.disabled())
                .map(|cell| cell.date)
                .collect();
            let labels: Vec<String> = days.iter().map(|date| format_date(*date)).collect();
            match context.pick("Date", &labels)? {
                Some(index) => days[index],
                None => return Err(usage("date <day|YYYY-MM-DD>")),
            }
        }
    };

    context.wizard.select_date(date)?;
    output::success(format!("Date: {}", format_date(date)));
    Ok(())
}

fn cmd_slots(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let wizard = context.wizard();
    match wizard.state().date() {
        Some(date) => {
            output::info(format!("Times on {date}:"));
            view::print_lines(&view::slot_lines(&wizard.time_slots()));
        }
        None => output::warning("Pick a date first with `date <day>`."),
    }
    Ok(())
}

fn cmd_time(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let label = match args.first() {
        Some(raw) => raw.trim().to_string(),
        None => {
            let free: Vec<String> = context
                .wizard()
                .time_slots()
                .into_iter()
                .filter(|view| view.slot.available)
                .map(|view| view.slot.label)
                .collect();
            match context.pick("Time", &free)? {
                Some(index) => free[index].clone(),
                None => return Err(usage("time <HH:MM>")),
            }
        }
    };

    context.wizard.select_time(&label)?;
    output::success(format!("Time: {label}"));
    Ok(())
}
