//! Terminal rendering of wizard projections.

use std::collections::HashMap;

use crate::booking::{FormValidation, WizardEvent, WizardObserver, WizardStep};
use crate::catalog::{Catalog, Provider, ProviderId, ServiceId};
use crate::cli::output;
use crate::render::{format_price, BookingConfirmation, BookingSummary, CalendarView, SlotView};

const WEEKDAY_HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su";
const SLOTS_PER_ROW: usize = 6;

pub fn step_heading(step: WizardStep) -> String {
    match step {
        WizardStep::Success => step.title().to_string(),
        step => format!("Step {} of 3 · {}", step.number(), step.title()),
    }
}

pub fn print_step(step: WizardStep) {
    output::section(step_heading(step));
}

pub fn services_lines(catalog: &Catalog, selected: Option<ServiceId>, currency: &str) -> Vec<String> {
    let name_width = catalog
        .services()
        .iter()
        .map(|service| service.name.chars().count())
        .max()
        .unwrap_or(0);
    catalog
        .services()
        .iter()
        .map(|service| {
            let marker = if selected == Some(service.id) { "*" } else { " " };
            format!(
                "{marker}[{}] {}  {:<name_width$}  {:>3} min  {:>8}",
                service.id,
                service.icon,
                service.name,
                service.duration_minutes,
                format_price(service.price, currency),
            )
        })
        .collect()
}

pub fn providers_lines(eligible: &[&Provider], selected: Option<ProviderId>) -> Vec<String> {
    eligible
        .iter()
        .map(|provider| {
            let marker = if selected == Some(provider.id) { "*" } else { " " };
            format!(
                "{marker}[{}] {:<3} {}",
                provider.id, provider.initials, provider.name
            )
        })
        .collect()
}

pub fn calendar_lines(view: &CalendarView) -> Vec<String> {
    let mut lines = vec![view.label.clone(), WEEKDAY_HEADER.to_string()];
    for week in view.weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                None => "    ".to_string(),
                Some(cell) if cell.is_selected => format!("[{:>2}]", cell.day),
                Some(cell) if cell.disabled() => format!("({:>2})", cell.day),
                Some(cell) if cell.is_today => format!(" {:>2}*", cell.day),
                Some(cell) => format!(" {:>2} ", cell.day),
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }
    lines.push("[dd] selected  (dd) unavailable  dd* today".to_string());
    lines
}

pub fn slot_lines(slots: &[SlotView]) -> Vec<String> {
    if slots.is_empty() {
        return vec!["Closed on this day.".to_string()];
    }
    slots
        .chunks(SLOTS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|view| {
                    if view.is_selected {
                        format!("[{}]", view.slot.label)
                    } else if view.slot.available {
                        format!(" {} ", view.slot.label)
                    } else {
                        format!(" {}x", view.slot.label)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        output::info(format!("  {line}"));
    }
}

pub fn print_summary(summary: &BookingSummary) {
    output::info("Summary:");
    print_lines(&summary.to_lines());
}

pub fn print_form_errors(report: &FormValidation) {
    for (field, message) in report.errors() {
        output::error(format!("{field}: {message}"));
    }
}

pub fn print_confirmation(confirmation: &BookingConfirmation) {
    output::success(format!(
        "Booking confirmed for {}.",
        confirmation.contact.name
    ));
    print_lines(&[
        format!("Email  {}", confirmation.contact.email),
        format!("Phone  {}", confirmation.contact.phone),
    ]);
    output::hint("Type `restart` to book another appointment.");
}

fn advance_hint(step: WizardStep) -> Option<&'static str> {
    match step {
        WizardStep::Service => Some("Ready: type `next` to pick a date."),
        WizardStep::Schedule => Some("Ready: type `next` to enter contact details."),
        WizardStep::Contact | WizardStep::Success => None,
    }
}

/// Prints wizard events as they happen.
#[derive(Default)]
pub struct TerminalView {
    advance_enabled: HashMap<WizardStep, bool>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WizardObserver for TerminalView {
    fn notify(&mut self, event: &WizardEvent) {
        match event {
            WizardEvent::StepEntered(step) => {
                self.advance_enabled.remove(step);
                print_step(*step);
            }
            WizardEvent::ProvidersUpdated { eligible, selected } => {
                let refs: Vec<&Provider> = eligible.iter().collect();
                output::info("Providers:");
                print_lines(&providers_lines(&refs, *selected));
            }
            WizardEvent::CalendarUpdated(view) => print_lines(&calendar_lines(view)),
            WizardEvent::SlotsUpdated { date, slots } => {
                output::info(format!("Times on {date}:"));
                print_lines(&slot_lines(slots));
            }
            WizardEvent::SummaryUpdated(summary) => print_summary(summary),
            WizardEvent::AdvanceEligibility { step, enabled } => {
                let previous = self.advance_enabled.insert(*step, *enabled);
                if *enabled && previous != Some(true) {
                    if let Some(message) = advance_hint(*step) {
                        output::hint(message);
                    }
                }
            }
            WizardEvent::FieldCleared(_) => {}
            WizardEvent::FormRejected(report) => print_form_errors(report),
            WizardEvent::Confirmed(confirmation) => print_confirmation(confirmation),
            WizardEvent::Restarted => output::info("Starting a new booking."),
        }
    }
}
