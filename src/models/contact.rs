use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("This field is required.")]
    FieldRequired { field: &'static str },
    #[error("Please enter a valid email.")]
    InvalidEmail,
}

impl ContactError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::FieldRequired { field } => field,
            Self::InvalidEmail => "email",
        }
    }
}

/// An inbound contact form submission.
///
/// `_gotcha` is a hidden honeypot field: humans never fill it, so a
/// populated value marks the submission as bot traffic to be dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "_gotcha", default, skip_serializing)]
    pub gotcha: String,
}

impl ContactSubmission {
    pub fn is_trap(&self) -> bool {
        !self.gotcha.is_empty()
    }

    /// Field-level validation: everything required, email must look like an
    /// address.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::FieldRequired { field });
            }
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one `@`,
/// no whitespace, and a dot inside the domain with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
