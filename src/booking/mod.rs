//! Booking state, step transitions, and contact-form handling.

pub mod events;
pub mod form;
pub mod state;
pub mod wizard;

pub use events::{WizardEvent, WizardObserver};
pub use form::{ContactDetails, ContactForm, FieldValidation, FormField, FormValidation};
pub use state::{BookingState, CalendarMonth, WizardStep};
pub use wizard::BookingWizard;
