//! Time-slot generation for a single calendar day.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// Weekly opening pattern used to lay out slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub opening_hour: u32,
    pub closing_hour: u32,
    pub short_day: Weekday,
    pub short_day_closing_hour: u32,
    pub closed_day: Weekday,
    pub slot_minutes: u32,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            opening_hour: 9,
            closing_hour: 18,
            short_day: Weekday::Sat,
            short_day_closing_hour: 14,
            closed_day: Weekday::Sun,
            slot_minutes: 30,
        }
    }
}

impl OpeningHours {
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.closing_hour > 24 || self.short_day_closing_hour > 24 {
            return Err(BookingError::InvalidConfig(
                "closing hours must be at most 24".into(),
            ));
        }
        if self.closing_hour <= self.opening_hour
            || self.short_day_closing_hour <= self.opening_hour
        {
            return Err(BookingError::InvalidConfig(
                "closing hours must come after the opening hour".into(),
            ));
        }
        if self.short_day_closing_hour >= self.closing_hour {
            return Err(BookingError::InvalidConfig(
                "the short day must close earlier than regular days".into(),
            ));
        }
        if self.short_day == self.closed_day {
            return Err(BookingError::InvalidConfig(
                "the short day cannot also be the closed day".into(),
            ));
        }
        if self.slot_minutes == 0 || 60 % self.slot_minutes != 0 {
            return Err(BookingError::InvalidConfig(
                "slot length must divide an hour evenly".into(),
            ));
        }
        Ok(())
    }

    pub fn is_closed(&self, date: NaiveDate) -> bool {
        date.weekday() == self.closed_day
    }

    /// Closing hour for `date`, or `None` when the shop is closed.
    pub fn closing_hour_for(&self, date: NaiveDate) -> Option<u32> {
        match date.weekday() {
            day if day == self.closed_day => None,
            day if day == self.short_day => Some(self.short_day_closing_hour),
            _ => Some(self.closing_hour),
        }
    }
}

/// One bookable time of day on a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub label: String,
    pub time: NaiveTime,
    pub available: bool,
}

impl TimeSlot {
    fn new(time: NaiveTime, available: bool) -> Self {
        Self {
            label: time.format("%H:%M").to_string(),
            time,
            available,
        }
    }
}

/// Source of slot availability for a date.
pub trait AvailabilitySource {
    fn slots_for(&self, date: NaiveDate) -> Vec<TimeSlot>;

    /// Whether the business is open on `date` at all. A day with no slots
    /// counts as closed.
    fn is_open(&self, date: NaiveDate) -> bool {
        !self.slots_for(date).is_empty()
    }
}

/// Local stand-in for a scheduling backend. Occupancy is a fixed hash of the
/// date and time, so a date always shows the same taken slots.
#[derive(Debug, Clone, Default)]
pub struct PseudoOccupancy {
    hours: OpeningHours,
}

impl PseudoOccupancy {
    pub fn new(hours: OpeningHours) -> Self {
        Self { hours }
    }
}

impl AvailabilitySource for PseudoOccupancy {
    fn slots_for(&self, date: NaiveDate) -> Vec<TimeSlot> {
        generate_time_slots(date, &self.hours)
    }

    fn is_open(&self, date: NaiveDate) -> bool {
        !self.hours.is_closed(date)
    }
}

pub fn is_slot_free(day: u32, hour: u32, minute: u32) -> bool {
    (day * 7 + hour * 13 + minute) % 5 != 0
}

/// Lays out the slots of `date` from opening up to (excluding) closing time.
pub fn generate_time_slots(date: NaiveDate, hours: &OpeningHours) -> Vec<TimeSlot> {
    let Some(closing) = hours.closing_hour_for(date) else {
        return Vec::new();
    };
    let step = hours.slot_minutes.max(1);

    let mut slots = Vec::new();
    for hour in hours.opening_hour..closing {
        for minute in (0..60).step_by(step as usize) {
            let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
                continue;
            };
            let available = is_slot_free(date.day(), time.hour(), time.minute());
            slots.push(TimeSlot::new(time, available));
        }
    }
    slots
}
