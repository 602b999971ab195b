//! Contact form fields and their validation rules.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9\s()-]{7,}$").expect("valid phone pattern"));

pub const NAME_ERROR: &str = "fill in name and surname";
pub const EMAIL_ERROR: &str = "enter a valid email";
pub const PHONE_ERROR: &str = "enter a valid phone number";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormField {
    Name,
    Email,
    Phone,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Phone];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
        }
    }

    pub fn validate(self, raw: &str) -> FieldValidation {
        match self {
            FormField::Name => validate_name(raw),
            FormField::Email => validate_email(raw),
            FormField::Phone => validate_phone(raw),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "email" | "e-mail" => Ok(FormField::Email),
            "phone" | "tel" => Ok(FormField::Phone),
            other => Err(format!("unknown form field `{other}`")),
        }
    }
}

/// Outcome for one field. An empty message means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    pub message: String,
    pub valid: bool,
}

impl Default for FieldValidation {
    fn default() -> Self {
        Self::ok()
    }
}

impl FieldValidation {
    pub fn ok() -> Self {
        Self {
            message: String::new(),
            valid: true,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            valid: false,
        }
    }
}

pub fn validate_name(raw: &str) -> FieldValidation {
    if raw.trim().is_empty() {
        FieldValidation::error(NAME_ERROR)
    } else {
        FieldValidation::ok()
    }
}

pub fn validate_email(raw: &str) -> FieldValidation {
    let email = raw.trim();
    if email.is_empty() || !EMAIL_PATTERN.is_match(email) {
        FieldValidation::error(EMAIL_ERROR)
    } else {
        FieldValidation::ok()
    }
}

pub fn validate_phone(raw: &str) -> FieldValidation {
    let phone = raw.trim();
    if phone.is_empty() || !PHONE_PATTERN.is_match(phone) {
        FieldValidation::error(PHONE_ERROR)
    } else {
        FieldValidation::ok()
    }
}

/// Per-field results of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormValidation {
    pub name: FieldValidation,
    pub email: FieldValidation,
    pub phone: FieldValidation,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.name.valid && self.email.valid && self.phone.valid
    }

    pub fn field(&self, field: FormField) -> &FieldValidation {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut FieldValidation {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
        }
    }

    /// Field/message pairs for every failing field.
    pub fn errors(&self) -> Vec<(FormField, &str)> {
        FormField::ALL
            .iter()
            .filter_map(|field| {
                let result = self.field(*field);
                (!result.message.is_empty()).then_some((*field, result.message.as_str()))
            })
            .collect()
    }
}

impl fmt::Display for FormValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors().into_iter().map(|(_, msg)| msg).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Trimmed contact details captured on a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Raw form input plus the errors currently on display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    shown: FormValidation,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    /// Stores the new input and clears only that field's displayed error.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
        }
        *self.shown.field_mut(field) = FieldValidation::ok();
    }

    pub fn validate(&self) -> FormValidation {
        let check = |field: FormField| field.validate(self.value(field));
        FormValidation {
            name: check(FormField::Name),
            email: check(FormField::Email),
            phone: check(FormField::Phone),
        }
    }

    /// Validates every field and keeps the result on display.
    pub fn submit(&mut self) -> Result<ContactDetails, FormValidation> {
        let report = self.validate();
        self.shown = report.clone();
        if report.is_valid() {
            Ok(ContactDetails {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                phone: self.phone.trim().to_string(),
            })
        } else {
            Err(report)
        }
    }

    pub fn displayed_errors(&self) -> &FormValidation {
        &self.shown
    }
}
