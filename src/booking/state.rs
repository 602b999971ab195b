use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::{Provider, Service};

/// Wizard stages in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Service,
    Schedule,
    Contact,
    Success,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Service => 1,
            WizardStep::Schedule => 2,
            WizardStep::Contact => 3,
            WizardStep::Success => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::Service),
            2 => Some(WizardStep::Schedule),
            3 => Some(WizardStep::Contact),
            4 => Some(WizardStep::Success),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Service => "Service & provider",
            WizardStep::Schedule => "Date & time",
            WizardStep::Contact => "Contact details",
            WizardStep::Success => "Booking confirmed",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::Success => write!(f, "the confirmation"),
            step => write!(f, "step {} ({})", step.number(), step.title().to_lowercase()),
        }
    }
}

/// A calendar page, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month <= 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn days_in_month(self) -> u32 {
        let (Some(first), Some(next)) = (self.first_day(), self.next().first_day()) else {
            return 0;
        };
        next.signed_duration_since(first).num_days() as u32
    }
}

/// The in-progress booking. Mutated only by [`crate::booking::BookingWizard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingState {
    pub(crate) service: Option<Service>,
    pub(crate) provider: Option<Provider>,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) time: Option<String>,
    pub(crate) step: WizardStep,
    pub(crate) visible_month: CalendarMonth,
}

impl BookingState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            service: None,
            provider: None,
            date: None,
            time: None,
            step: WizardStep::Service,
            visible_month: CalendarMonth::of(today),
        }
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn provider(&self) -> Option<&Provider> {
        self.provider.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn visible_month(&self) -> CalendarMonth {
        self.visible_month
    }

    pub fn has_service_and_provider(&self) -> bool {
        self.service.is_some() && self.provider.is_some()
    }

    pub fn has_date_and_time(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_rolls_over_year_boundaries() {
        let december = CalendarMonth {
            year: 2026,
            month: 12,
        };
        assert_eq!(
            december.next(),
            CalendarMonth {
                year: 2027,
                month: 1
            }
        );
        assert_eq!(december.next().previous(), december);
    }

    #[test]
    fn months_order_chronologically() {
        let late = CalendarMonth {
            year: 2026,
            month: 12,
        };
        let early = CalendarMonth {
            year: 2027,
            month: 1,
        };
        assert!(late < early);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(CalendarMonth { year: 2028, month: 2 }.days_in_month(), 29);
        assert_eq!(CalendarMonth { year: 2026, month: 2 }.days_in_month(), 28);
        assert_eq!(CalendarMonth { year: 2026, month: 10 }.days_in_month(), 31);
    }

    #[test]
    fn steps_walk_in_order() {
        assert_eq!(WizardStep::Service.next(), Some(WizardStep::Schedule));
        assert_eq!(WizardStep::Success.next(), None);
        assert_eq!(WizardStep::Service.previous(), None);
        assert_eq!(WizardStep::Contact.previous(), Some(WizardStep::Schedule));
    }
}
