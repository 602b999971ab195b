//! The wizard controller: owns the booking state and routes every mutation
//! through a named operation.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::availability::{AvailabilitySource, OpeningHours, PseudoOccupancy};
use crate::booking::events::{WizardEvent, WizardObserver};
use crate::booking::form::{ContactForm, FormField};
use crate::booking::state::{BookingState, CalendarMonth, WizardStep};
use crate::catalog::{Catalog, Provider, ProviderId, ServiceId};
use crate::errors::BookingError;
use crate::render::{slot_views, BookingConfirmation, BookingSummary, CalendarView, SlotView};
use crate::time::{Clock, SystemClock};

const DEFAULT_CURRENCY: &str = "Kč";

pub struct BookingWizard {
    catalog: Catalog,
    availability: Box<dyn AvailabilitySource>,
    clock: Box<dyn Clock>,
    currency: String,
    state: BookingState,
    form: ContactForm,
    confirmation: Option<BookingConfirmation>,
    observers: Vec<Box<dyn WizardObserver>>,
}

impl BookingWizard {
    /// Creates a wizard at step 1 with every selection empty.
    pub fn new(catalog: Catalog, hours: OpeningHours, clock: Box<dyn Clock>) -> Self {
        let today = clock.today();
        Self {
            catalog,
            availability: Box::new(PseudoOccupancy::new(hours)),
            clock,
            currency: DEFAULT_CURRENCY.to_string(),
            state: BookingState::new(today),
            form: ContactForm::new(),
            confirmation: None,
            observers: Vec::new(),
        }
    }

    /// Replaces the pseudo-occupancy stub with another availability source.
    pub fn with_availability(mut self, source: Box<dyn AvailabilitySource>) -> Self {
        self.availability = source;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn subscribe(&mut self, observer: Box<dyn WizardObserver>) {
        self.observers.push(observer);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn eligible_providers(&self) -> Vec<&Provider> {
        self.catalog
            .eligible_providers(self.state.service.as_ref().map(|service| service.id))
    }

    /// Whether the forward control of the current step is enabled.
    pub fn can_advance(&self) -> bool {
        match self.state.step {
            WizardStep::Service => self.state.has_service_and_provider(),
            WizardStep::Schedule => self.state.has_date_and_time(),
            WizardStep::Contact => self.form.validate().is_valid(),
            WizardStep::Success => false,
        }
    }

    pub fn calendar(&self) -> CalendarView {
        CalendarView::build(&self.state, self.today(), self.availability.as_ref())
    }

    /// Slots for the selected date, or nothing when no date is chosen.
    pub fn time_slots(&self) -> Vec<SlotView> {
        match self.state.date {
            Some(date) => slot_views(&self.availability.slots_for(date), self.state.time()),
            None => Vec::new(),
        }
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary::from_state(&self.state, &self.currency)
    }

    pub fn select_service(&mut self, id: ServiceId) -> Result<(), BookingError> {
        self.ensure_step(WizardStep::Service)?;
        let service = self
            .catalog
            .service(id)
            .cloned()
            .ok_or(BookingError::UnknownService(id))?;
        debug!(service = %service.name, "service selected");

        let keeps_provider = self
            .state
            .provider
            .as_ref()
            .map_or(true, |provider| provider.can_perform(service.id));
        if !keeps_provider {
            debug!("provider cleared: not eligible for the new service");
            self.state.provider = None;
        }
        self.state.service = Some(service);

        self.emit_providers();
        self.emit_eligibility();
        Ok(())
    }

    pub fn select_provider(&mut self, id: ProviderId) -> Result<(), BookingError> {
        self.ensure_step(WizardStep::Service)?;
        let provider = self
            .catalog
            .provider(id)
            .cloned()
            .ok_or(BookingError::UnknownProvider(id))?;
        if let Some(service) = &self.state.service {
            if !provider.can_perform(service.id) {
                return Err(BookingError::ProviderNotEligible {
                    provider: provider.name,
                    service: service.name.clone(),
                });
            }
        }
        debug!(provider = %provider.name, "provider selected");
        self.state.provider = Some(provider);

        self.emit_providers();
        self.emit_eligibility();
        Ok(())
    }

    pub fn next_month(&mut self) -> Result<CalendarMonth, BookingError> {
        self.ensure_step(WizardStep::Schedule)?;
        self.state.visible_month = self.state.visible_month.next();
        self.emit(WizardEvent::CalendarUpdated(self.calendar()));
        Ok(self.state.visible_month)
    }

    /// Steps the calendar back unless that would pass the current month.
    /// Returns whether the page moved.
    pub fn previous_month(&mut self) -> Result<bool, BookingError> {
        self.ensure_step(WizardStep::Schedule)?;
        let now = CalendarMonth::of(self.today());
        let target = self.state.visible_month.previous();
        if target < now {
            debug!("calendar already shows the current month");
            return Ok(false);
        }
        self.state.visible_month = target;
        self.emit(WizardEvent::CalendarUpdated(self.calendar()));
        Ok(true)
    }

    pub fn is_day_bookable(&self, date: NaiveDate) -> bool {
        date >= self.today() && self.availability.is_open(date)
    }

    /// Records the date, drops any chosen time, and publishes the new slots.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        self.ensure_step(WizardStep::Schedule)?;
        if !self.is_day_bookable(date) {
            return Err(BookingError::DateUnavailable(date));
        }
        debug!(%date, "date selected");
        self.state.date = Some(date);
        self.state.time = None;
        self.state.visible_month = CalendarMonth::of(date);

        self.emit(WizardEvent::CalendarUpdated(self.calendar()));
        self.emit(WizardEvent::SlotsUpdated {
            date,
            slots: self.time_slots(),
        });
        self.emit_eligibility();
        Ok(())
    }

    pub fn select_time(&mut self, label: &str) -> Result<(), BookingError> {
        self.ensure_step(WizardStep::Schedule)?;
        let date = self.state.date.ok_or(BookingError::DateNotSelected)?;
        let slot = self
            .availability
            .slots_for(date)
            .into_iter()
            .find(|slot| slot.label == label.trim() && slot.available)
            .ok_or_else(|| BookingError::SlotUnavailable(label.trim().to_string()))?;
        debug!(time = %slot.label, "time selected");
        self.state.time = Some(slot.label);

        self.emit(WizardEvent::SlotsUpdated {
            date,
            slots: self.time_slots(),
        });
        self.emit_eligibility();
        Ok(())
    }

    pub fn set_contact_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), BookingError> {
        self.ensure_step(WizardStep::Contact)?;
        self.form.set(field, value);
        self.emit(WizardEvent::FieldCleared(field));
        Ok(())
    }

    /// Validates the contact form and, when it passes, confirms the booking.
    pub fn submit(&mut self) -> Result<WizardStep, BookingError> {
        self.ensure_step(WizardStep::Contact)?;
        if !self.state.has_service_and_provider() || !self.state.has_date_and_time() {
            return Err(BookingError::StepBlocked {
                step: WizardStep::Contact,
                reason: "the booking selections are incomplete",
            });
        }

        match self.form.submit() {
            Ok(contact) => {
                let confirmation = BookingConfirmation {
                    summary: self.summary(),
                    contact,
                };
                info!(
                    service = %confirmation.summary.service,
                    date = %confirmation.summary.date,
                    time = %confirmation.summary.time,
                    "booking confirmed"
                );
                self.confirmation = Some(confirmation);
                self.enter(WizardStep::Success);
                Ok(WizardStep::Success)
            }
            Err(report) => {
                debug!(errors = %report, "contact form rejected");
                let message = report.to_string();
                self.emit(WizardEvent::FormRejected(report));
                Err(BookingError::InvalidForm(message))
            }
        }
    }

    /// Moves forward when the next step's precondition holds.
    pub fn advance_step(&mut self) -> Result<WizardStep, BookingError> {
        let step = self.state.step;
        match step {
            WizardStep::Service if !self.state.has_service_and_provider() => {
                Err(BookingError::StepBlocked {
                    step,
                    reason: "choose a service and a provider first",
                })
            }
            WizardStep::Schedule if !self.state.has_date_and_time() => {
                Err(BookingError::StepBlocked {
                    step,
                    reason: "choose a date and a time first",
                })
            }
            WizardStep::Contact => self.submit(),
            WizardStep::Success => Err(BookingError::StepBlocked {
                step,
                reason: "the booking is complete, restart to book again",
            }),
            WizardStep::Service | WizardStep::Schedule => {
                let next = step.next().unwrap_or(step);
                self.enter(next);
                Ok(next)
            }
        }
    }

    /// Goes back one step. Selections are left untouched.
    pub fn retreat_step(&mut self) -> Result<WizardStep, BookingError> {
        match self.state.step.previous() {
            _ if self.state.step == WizardStep::Success => Err(BookingError::StepBlocked {
                step: WizardStep::Success,
                reason: "the booking is complete, restart to book again",
            }),
            Some(previous) => {
                self.enter(previous);
                Ok(previous)
            }
            None => Ok(self.state.step),
        }
    }

    /// Jumps back to any earlier step.
    pub fn return_to_step(&mut self, target: WizardStep) -> Result<WizardStep, BookingError> {
        let current = self.state.step;
        if target == current {
            return Ok(current);
        }
        if current == WizardStep::Success || target > current {
            return Err(BookingError::StepBlocked {
                step: current,
                reason: "only earlier steps can be revisited",
            });
        }
        self.enter(target);
        Ok(target)
    }

    /// Clears every selection and the form, and starts over at step 1.
    pub fn restart(&mut self) {
        info!("booking restarted");
        self.state = BookingState::new(self.today());
        self.form = ContactForm::new();
        self.confirmation = None;
        self.emit(WizardEvent::Restarted);
        self.enter(WizardStep::Service);
    }

    /// Fails with `WrongStep` unless the wizard is on `expected`.
    pub fn ensure_step(&self, expected: WizardStep) -> Result<(), BookingError> {
        if self.state.step == expected {
            Ok(())
        } else {
            Err(BookingError::WrongStep {
                expected,
                actual: self.state.step,
            })
        }
    }

    fn enter(&mut self, step: WizardStep) {
        debug!(from = %self.state.step, to = %step, "entering step");
        self.state.step = step;
        self.emit(WizardEvent::StepEntered(step));

        match step {
            WizardStep::Service => {
                self.emit_providers();
                self.emit_eligibility();
            }
            WizardStep::Schedule => {
                self.emit(WizardEvent::CalendarUpdated(self.calendar()));
                if let Some(date) = self.state.date {
                    self.emit(WizardEvent::SlotsUpdated {
                        date,
                        slots: self.time_slots(),
                    });
                }
                self.emit_eligibility();
            }
            WizardStep::Contact => {
                self.emit(WizardEvent::SummaryUpdated(self.summary()));
            }
            WizardStep::Success => {
                self.emit(WizardEvent::SummaryUpdated(self.summary()));
                if let Some(confirmation) = self.confirmation.clone() {
                    self.emit(WizardEvent::Confirmed(confirmation));
                }
            }
        }
    }

    fn emit_providers(&mut self) {
        let eligible = self.eligible_providers().into_iter().cloned().collect();
        let selected = self.state.provider.as_ref().map(|provider| provider.id);
        self.emit(WizardEvent::ProvidersUpdated { eligible, selected });
    }

    fn emit_eligibility(&mut self) {
        let step = self.state.step;
        let enabled = self.can_advance();
        self.emit(WizardEvent::AdvanceEligibility { step, enabled });
    }

    fn emit(&mut self, event: WizardEvent) {
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new(
            Catalog::barbershop(),
            OpeningHours::default(),
            Box::new(SystemClock),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::{Datelike, NaiveTime, Weekday};

    use super::*;
    use crate::availability::TimeSlot;
    use crate::time::FixedClock;

    // 2026-10-18 is a Sunday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn wizard() -> BookingWizard {
        BookingWizard::new(
            Catalog::barbershop(),
            OpeningHours::default(),
            Box::new(FixedClock::new(today())),
        )
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<WizardEvent>>>);

    impl WizardObserver for Recorder {
        fn notify(&mut self, event: &WizardEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    impl Recorder {
        fn take(&self) -> Vec<WizardEvent> {
            self.0.borrow_mut().drain(..).collect()
        }
    }

    fn at_schedule() -> BookingWizard {
        let mut wizard = wizard();
        wizard.select_service(1).unwrap();
        wizard.select_provider(1).unwrap();
        wizard.advance_step().unwrap();
        wizard
    }

    fn at_contact() -> BookingWizard {
        let mut wizard = at_schedule();
        wizard.select_date(monday()).unwrap();
        wizard.select_time("10:00").unwrap();
        wizard.advance_step().unwrap();
        wizard
    }

    #[test]
    fn starts_empty_at_step_one() {
        let wizard = wizard();
        assert_eq!(wizard.step(), WizardStep::Service);
        assert!(wizard.state().service().is_none());
        assert_eq!(wizard.state().visible_month(), CalendarMonth::of(today()));
        assert!(!wizard.can_advance());
    }

    #[test]
    fn service_change_clears_ineligible_provider() {
        let mut wizard = wizard();
        wizard.select_service(1).unwrap();
        wizard.select_provider(2).unwrap();
        // Martin Král does not do kids' haircuts.
        wizard.select_service(4).unwrap();
        assert!(wizard.state().provider().is_none());
        assert!(!wizard.can_advance());
    }

    #[test]
    fn service_change_keeps_eligible_provider() {
        let mut wizard = wizard();
        wizard.select_service(1).unwrap();
        wizard.select_provider(3).unwrap();
        wizard.select_service(4).unwrap();
        assert_eq!(wizard.state().provider().map(|p| p.id), Some(3));
        assert!(wizard.can_advance());
    }

    #[test]
    fn ineligible_provider_is_rejected() {
        let mut wizard = wizard();
        wizard.select_service(5).unwrap();
        let err = wizard.select_provider(2).unwrap_err();
        assert!(matches!(err, BookingError::ProviderNotEligible { .. }));
        assert!(wizard.state().provider().is_none());
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut wizard = wizard();
        assert!(matches!(
            wizard.select_service(42),
            Err(BookingError::UnknownService(42))
        ));
        assert!(matches!(
            wizard.select_provider(9),
            Err(BookingError::UnknownProvider(9))
        ));
    }

    #[test]
    fn step_one_needs_service_and_provider() {
        let mut wizard = wizard();
        wizard.select_service(1).unwrap();
        assert!(matches!(
            wizard.advance_step(),
            Err(BookingError::StepBlocked { .. })
        ));
        assert_eq!(wizard.step(), WizardStep::Service);

        wizard.select_provider(1).unwrap();
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance_step().unwrap(), WizardStep::Schedule);
    }

    #[test]
    fn step_two_needs_date_and_time() {
        let mut wizard = at_schedule();
        assert!(wizard.advance_step().is_err());
        wizard.select_date(monday()).unwrap();
        assert!(!wizard.can_advance());
        wizard.select_time("10:00").unwrap();
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance_step().unwrap(), WizardStep::Contact);
    }

    #[test]
    fn new_date_clears_time() {
        let mut wizard = at_schedule();
        wizard.select_date(monday()).unwrap();
        wizard.select_time("10:00").unwrap();
        wizard
            .select_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap())
            .unwrap();
        assert!(wizard.state().time().is_none());
        assert!(!wizard.can_advance());
    }

    #[test]
    fn closed_and_past_days_cannot_be_selected() {
        let mut wizard = at_schedule();
        let sunday = NaiveDate::from_ymd_opt(2026, 10, 25).unwrap();
        let past = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert!(matches!(
            wizard.select_date(sunday),
            Err(BookingError::DateUnavailable(_))
        ));
        assert!(wizard.select_date(past).is_err());
        assert!(wizard.state().date().is_none());
    }

    #[test]
    fn taken_or_unknown_slots_are_rejected() {
        let mut wizard = at_schedule();
        assert!(matches!(
            wizard.select_time("10:00"),
            Err(BookingError::DateNotSelected)
        ));
        wizard.select_date(monday()).unwrap();
        // 09:00 on the 19th hashes to a taken slot.
        assert!(wizard.select_time("09:00").is_err());
        assert!(wizard.select_time("18:00").is_err());
        assert!(wizard.state().time().is_none());
    }

    #[test]
    fn calendar_cannot_go_before_current_month() {
        let mut wizard = at_schedule();
        assert!(!wizard.previous_month().unwrap());
        assert_eq!(wizard.state().visible_month(), CalendarMonth::of(today()));

        wizard.next_month().unwrap();
        wizard.next_month().unwrap();
        wizard.next_month().unwrap();
        assert_eq!(
            wizard.state().visible_month(),
            CalendarMonth {
                year: 2027,
                month: 1
            }
        );
        assert!(wizard.previous_month().unwrap());
        assert_eq!(
            wizard.state().visible_month(),
            CalendarMonth {
                year: 2026,
                month: 12
            }
        );
    }

    #[test]
    fn retreat_keeps_selections() {
        let mut wizard = at_contact();
        let before = wizard.state().clone();
        assert_eq!(wizard.retreat_step().unwrap(), WizardStep::Schedule);
        assert_eq!(wizard.retreat_step().unwrap(), WizardStep::Service);
        assert_eq!(wizard.retreat_step().unwrap(), WizardStep::Service);
        assert_eq!(wizard.state().service(), before.service());
        assert_eq!(wizard.state().provider(), before.provider());
        assert_eq!(wizard.state().date(), before.date());
        assert_eq!(wizard.state().time(), before.time());
    }

    #[test]
    fn return_to_step_only_goes_backwards() {
        let mut wizard = at_contact();
        assert_eq!(
            wizard.return_to_step(WizardStep::Service).unwrap(),
            WizardStep::Service
        );
        assert!(wizard.return_to_step(WizardStep::Contact).is_err());
    }

    #[test]
    fn selections_are_bound_to_their_step() {
        let mut wizard = at_schedule();
        assert!(matches!(
            wizard.select_service(2),
            Err(BookingError::WrongStep { .. })
        ));
        assert!(wizard.set_contact_field(FormField::Name, "Jan").is_err());
    }

    #[test]
    fn invalid_form_blocks_success() {
        let mut wizard = at_contact();
        wizard.set_contact_field(FormField::Name, "Jan Novák").unwrap();
        wizard.set_contact_field(FormField::Email, "a@b").unwrap();
        wizard.set_contact_field(FormField::Phone, "123").unwrap();
        let err = wizard.submit().unwrap_err();
        assert!(matches!(err, BookingError::InvalidForm(_)));
        assert_eq!(wizard.step(), WizardStep::Contact);
        assert!(!wizard.form().displayed_errors().email.valid);
        assert!(wizard.confirmation().is_none());
    }

    #[test]
    fn full_booking_reaches_success() {
        let recorder = Recorder::default();
        let mut wizard = wizard();
        wizard.subscribe(Box::new(recorder.clone()));

        wizard.select_service(1).unwrap();
        wizard.select_provider(1).unwrap();
        wizard.advance_step().unwrap();
        assert!(recorder
            .take()
            .iter()
            .any(|event| matches!(event, WizardEvent::CalendarUpdated(_))));

        let slot = {
            wizard.select_date(monday()).unwrap();
            wizard
                .time_slots()
                .into_iter()
                .find(|view| view.slot.available)
                .map(|view| view.slot.label)
                .expect("an open slot")
        };
        wizard.select_time(&slot).unwrap();
        wizard.advance_step().unwrap();
        assert!(recorder
            .take()
            .iter()
            .any(|event| matches!(event, WizardEvent::SummaryUpdated(_))));

        wizard.set_contact_field(FormField::Name, "Jan Novák").unwrap();
        wizard.set_contact_field(FormField::Email, "jan@example.cz").unwrap();
        wizard
            .set_contact_field(FormField::Phone, "+420 123 456 789")
            .unwrap();
        assert_eq!(wizard.advance_step().unwrap(), WizardStep::Success);

        let confirmation = wizard.confirmation().expect("confirmed");
        assert_eq!(confirmation.summary.service, "Men's haircut");
        assert_eq!(confirmation.summary.provider, "Jakub Černý");
        assert_eq!(confirmation.summary.date, "19 October 2026");
        assert_eq!(confirmation.summary.time, slot);
        assert_eq!(confirmation.summary.price, "450 Kč");
        assert!(recorder
            .take()
            .iter()
            .any(|event| matches!(event, WizardEvent::Confirmed(_))));

        assert!(wizard.retreat_step().is_err());
        assert!(wizard.advance_step().is_err());
    }

    #[test]
    fn restart_clears_everything() {
        let mut wizard = at_contact();
        wizard.set_contact_field(FormField::Name, "Jan").unwrap();
        wizard.restart();
        assert_eq!(wizard.step(), WizardStep::Service);
        assert!(wizard.state().service().is_none());
        assert!(wizard.state().provider().is_none());
        assert!(wizard.state().date().is_none());
        assert!(wizard.state().time().is_none());
        assert_eq!(wizard.state().visible_month(), CalendarMonth::of(today()));
        assert_eq!(wizard.form().value(FormField::Name), "");
    }

    #[test]
    fn restart_returns_calendar_to_current_month() {
        let mut wizard = at_schedule();
        wizard.next_month().unwrap();
        wizard.next_month().unwrap();
        let december = NaiveDate::from_ymd_opt(2026, 12, 2).unwrap();
        assert_eq!(wizard.state().visible_month(), CalendarMonth::of(december));
        wizard.select_date(december).unwrap();

        wizard.restart();
        assert_eq!(wizard.state().visible_month(), CalendarMonth::of(today()));
        assert!(wizard.state().date().is_none());
    }

    /// Opens Mondays only, with a single lunchtime slot.
    struct MondayLunch;

    impl AvailabilitySource for MondayLunch {
        fn slots_for(&self, date: NaiveDate) -> Vec<TimeSlot> {
            if date.weekday() != Weekday::Mon {
                return Vec::new();
            }
            vec![TimeSlot {
                label: "12:00".into(),
                time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                available: true,
            }]
        }
    }

    #[test]
    fn custom_source_decides_open_days() {
        let mut wizard = wizard().with_availability(Box::new(MondayLunch));
        wizard.select_service(1).unwrap();
        wizard.select_provider(1).unwrap();
        wizard.advance_step().unwrap();

        let tuesday = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert!(!wizard.is_day_bookable(tuesday));
        assert!(matches!(
            wizard.select_date(tuesday),
            Err(BookingError::DateUnavailable(_))
        ));
        let calendar = wizard.calendar();
        assert!(calendar.cell(20).unwrap().disabled());
        assert!(!calendar.cell(19).unwrap().disabled());

        wizard.select_date(monday()).unwrap();
        assert!(wizard.select_time("10:00").is_err());
        wizard.select_time("12:00").unwrap();
        assert!(wizard.can_advance());
    }

    #[test]
    fn eligibility_is_published_after_selections() {
        let recorder = Recorder::default();
        let mut wizard = wizard();
        wizard.subscribe(Box::new(recorder.clone()));
        wizard.select_service(2).unwrap();
        wizard.select_provider(2).unwrap();
        let flags: Vec<bool> = recorder
            .take()
            .into_iter()
            .filter_map(|event| match event {
                WizardEvent::AdvanceEligibility { enabled, .. } => Some(enabled),
                _ => None,
            })
            .collect();
        assert_eq!(flags, vec![false, true]);
    }
}
