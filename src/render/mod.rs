//! Display projections of the booking state. Nothing here holds state.

pub mod calendar;
pub mod summary;

pub use calendar::{slot_views, CalendarView, DayCell, SlotView};
pub use summary::{BookingConfirmation, BookingSummary};

use chrono::{Datelike, NaiveDate};

/// Shown for any field that has not been chosen yet.
pub const PLACEHOLDER: &str = "—";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("?")
}

/// Formats a date as `19 October 2026`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

pub fn format_price(price: u32, currency: &str) -> String {
    format!("{price} {currency}")
}
