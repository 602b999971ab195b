use chrono::NaiveDate;

use crate::booking::{form::FormField, form::FormValidation, WizardStep};
use crate::catalog::{Provider, ProviderId};
use crate::render::{BookingConfirmation, BookingSummary, CalendarView, SlotView};

/// Notifications emitted after each wizard operation. Each carries the
/// projection a view needs, so views never read the state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    StepEntered(WizardStep),
    ProvidersUpdated {
        eligible: Vec<Provider>,
        selected: Option<ProviderId>,
    },
    CalendarUpdated(CalendarView),
    SlotsUpdated {
        date: NaiveDate,
        slots: Vec<SlotView>,
    },
    SummaryUpdated(BookingSummary),
    AdvanceEligibility {
        step: WizardStep,
        enabled: bool,
    },
    FieldCleared(FormField),
    FormRejected(FormValidation),
    Confirmed(BookingConfirmation),
    Restarted,
}

/// A rendering adapter subscribed to wizard changes.
pub trait WizardObserver {
    fn notify(&mut self, event: &WizardEvent);
}
