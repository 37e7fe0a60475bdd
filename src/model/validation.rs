//! Field rules for degrees, departments and teachers.
//!
//! The server runs these before every write and treats a failure as a 400. The client form
//! mirror runs the same functions to give feedback before a request is sent; there they are
//! advisory only.

use std::fmt;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rule violation found in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether a specific field was rejected.
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Implemented by every payload that can be checked against the rule set.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

pub fn required(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "is required");
    }
}

pub fn positive(errors: &mut ValidationErrors, field: &'static str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.add(field, "must be a positive number");
    }
}

/// `local@domain.tld` with no whitespace anywhere.
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Exactly ten ASCII digits.
pub fn is_phone_number(value: &str) -> bool {
    let value = value.trim();
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

pub fn degree_rules(
    name: &str,
    coefficient: f64,
    specialization: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    required(&mut errors, "name", name);
    positive(&mut errors, "coefficient", coefficient);
    required(&mut errors, "specialization", specialization);
    errors.into_result()
}

pub fn department_rules(full_name: &str, abbreviation: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    required(&mut errors, "fullName", full_name);
    required(&mut errors, "abbreviation", abbreviation);
    errors.into_result()
}

/// Rules shared by teacher create and update. The human code is checked separately since
/// only creation carries it.
pub fn teacher_rules(
    full_name: &str,
    department: &str,
    degree: &str,
    email: &str,
    phone_number: &str,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    required(&mut errors, "fullName", full_name);
    required(&mut errors, "department", department);
    required(&mut errors, "degree", degree);

    if email.trim().is_empty() {
        errors.add("email", "is required");
    } else if !is_email(email) {
        errors.add("email", "is not a valid email address");
    }

    if phone_number.trim().is_empty() {
        errors.add("phoneNumber", "is required");
    } else if !is_phone_number(phone_number) {
        errors.add("phoneNumber", "must be exactly 10 digits");
    }

    errors
}
