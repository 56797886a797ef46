use once_cell::sync::Lazy;
use regex::Regex;
use shared::{
    error::ServiceError,
    protocol::{PersonAddRequest, PersonUpdateRequest},
};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email regex"));

/// Field-level rules for add/update requests. Reports only the first
/// violated rule, checked in field declaration order.
pub trait Validate {
    fn validate(&self) -> Result<(), ServiceError>;
}

impl Validate for PersonAddRequest {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_person_fields(self.person_name.as_deref(), self.email.as_deref())
    }
}

impl Validate for PersonUpdateRequest {
    fn validate(&self) -> Result<(), ServiceError> {
        validate_person_fields(self.person_name.as_deref(), self.email.as_deref())
    }
}

fn validate_person_fields(
    person_name: Option<&str>,
    email: Option<&str>,
) -> Result<(), ServiceError> {
    required(person_name, "Person name is required.")?;
    let email = required(email, "Email is required.")?;
    if !is_valid_email(email) {
        return Err(ServiceError::Validation("Invalid email format.".into()));
    }
    Ok(())
}

fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ServiceError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ServiceError::Validation(message.to_string())),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
