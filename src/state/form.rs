#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Serialize;

/// A contact form submission as entered by the user.
///
/// Field values are kept exactly as typed; validation trims only for the
/// emptiness checks so a failed submission never loses the user's input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Validate required fields, then email shape.
    ///
    /// # Errors
    ///
    /// `MissingFields` if any field is empty after trimming, otherwise
    /// `InvalidEmail` if the email does not match the expected shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Why a submission was rejected before the transport ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
}

impl ValidationError {
    /// User-facing message for this rejection.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill in all fields",
            Self::InvalidEmail => "Please enter a valid email address",
        }
    }
}

/// Whether `email` matches the `local@domain.tld` shape: no whitespace,
/// exactly one `@` with a non-empty local part, and a dot in the domain
/// that is neither its first nor its last character.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Submission lifecycle for the contact form.
///
/// At most one submission is in flight per form: a submit event that
/// arrives while `Submitting` is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    /// Begin a submission. Returns `false` and leaves the phase unchanged
    /// while one is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if *self == Self::Submitting {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Complete the in-flight submission, returning to idle.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }
}
