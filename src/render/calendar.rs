use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::availability::{AvailabilitySource, TimeSlot};
use crate::booking::{BookingState, CalendarMonth};

use super::month_name;

/// One selectable (or disabled) day on the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_past: bool,
    pub is_closed: bool,
}

impl DayCell {
    pub fn disabled(&self) -> bool {
        self.is_past || self.is_closed
    }
}

/// A month page laid out Monday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub month: CalendarMonth,
    pub label: String,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
    pub can_go_previous: bool,
}

impl CalendarView {
    pub fn build(state: &BookingState, today: NaiveDate, source: &dyn AvailabilitySource) -> Self {
        let month = state.visible_month();
        let leading_blanks = month
            .first_day()
            .map(|first| first.weekday().num_days_from_monday())
            .unwrap_or(0);

        let days = (1..=month.days_in_month())
            .filter_map(|day| month.day(day))
            .map(|date| DayCell {
                day: date.day(),
                date,
                is_today: date == today,
                is_selected: state.date() == Some(date),
                is_past: date < today,
                is_closed: !source.is_open(date),
            })
            .collect();

        Self {
            month,
            label: format!("{} {}", month_name(month.month), month.year),
            leading_blanks,
            days,
            can_go_previous: month > CalendarMonth::of(today),
        }
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.days.iter().find(|cell| cell.day == day)
    }

    /// Week rows of seven optional cells, blanks padded at both ends.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let mut slots: Vec<Option<&DayCell>> = (0..self.leading_blanks).map(|_| None).collect();
        slots.extend(self.days.iter().map(Some));
        while slots.len() % 7 != 0 {
            slots.push(None);
        }
        slots.chunks(7).map(|week| week.to_vec()).collect()
    }
}

/// A slot as listed to the user, with its selection mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub slot: TimeSlot,
    pub is_selected: bool,
}

pub fn slot_views(slots: &[TimeSlot], selected: Option<&str>) -> Vec<SlotView> {
    slots
        .iter()
        .map(|slot| SlotView {
            is_selected: selected == Some(slot.label.as_str()),
            slot: slot.clone(),
        })
        .collect()
}
