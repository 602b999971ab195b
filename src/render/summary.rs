use serde::Serialize;

use crate::booking::{form::ContactDetails, BookingState};

use super::{format_date, format_price, PLACEHOLDER};

/// Human-readable projection of the current selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub service: String,
    pub provider: String,
    pub date: String,
    pub time: String,
    pub price: String,
}

impl BookingSummary {
    pub fn from_state(state: &BookingState, currency: &str) -> Self {
        Self {
            service: state
                .service()
                .map(|service| service.name.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            provider: state
                .provider()
                .map(|provider| provider.name.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            date: state
                .date()
                .map(format_date)
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            time: state
                .time()
                .map(str::to_string)
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            price: state
                .service()
                .map(|service| format_price(service.price, currency))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }

    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Service", self.service.as_str()),
            ("Provider", self.provider.as_str()),
            ("Date", self.date.as_str()),
            ("Time", self.time.as_str()),
            ("Price", self.price.as_str()),
        ]
    }

    /// Two-column text block with labels padded to a common width.
    pub fn to_lines(&self) -> Vec<String> {
        let rows = self.rows();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        rows.iter()
            .map(|(label, value)| format!("{label:<width$}  {value}"))
            .collect()
    }
}

/// Everything shown on the success screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub summary: BookingSummary,
    pub contact: ContactDetails,
}
