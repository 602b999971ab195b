use chrono::NaiveDate;
use thiserror::Error;

use crate::booking::WizardStep;

/// Error type that captures booking and configuration failures.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown service: {0}")]
    UnknownService(u32),
    #[error("Unknown provider: {0}")]
    UnknownProvider(u32),
    #[error("Provider `{provider}` does not offer `{service}`")]
    ProviderNotEligible { provider: String, service: String },
    #[error("No service selected")]
    ServiceNotSelected,
    #[error("No date selected")]
    DateNotSelected,
    #[error("{0} is not bookable")]
    DateUnavailable(NaiveDate),
    #[error("Time slot {0} is not available")]
    SlotUnavailable(String),
    #[error("This action belongs to {expected}, but the wizard is at {actual}")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },
    #[error("Cannot leave {step}: {reason}")]
    StepBlocked {
        step: WizardStep,
        reason: &'static str,
    },
    #[error("Contact details are invalid: {0}")]
    InvalidForm(String),
}
