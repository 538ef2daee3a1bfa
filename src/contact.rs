//! Contact form validation and the simulated send cycle.
//!
//! There is no backend: a valid submission enters `Sending`, the host waits
//! [`SIMULATED_SEND_MS`], then calls [`ContactForm::finish`] to reset the form
//! and show the success notice.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::notice::Notice;

/// Shortest accepted message, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Delay standing in for a network round trip.
pub const SIMULATED_SEND_MS: u32 = 1500;

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_NOTICE: &str = "✓ Message sent successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("❗ Missing name parameters in contact form")]
    MissingName,
    #[error("❗ Please enter a valid email address")]
    InvalidEmail,
    #[error("❗ Please enter a valid message (at least 10 characters)")]
    MessageTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// Check names, then email, then message length; the first failure wins.
///
/// # Errors
///
/// Returns the [`ContactError`] whose message should be shown to the user.
pub fn validate(form: &ContactSubmission) -> Result<(), ContactError> {
    if form.first_name.is_empty() || form.last_name.is_empty() {
        return Err(ContactError::MissingName);
    }
    if !is_valid_email(&form.email) {
        return Err(ContactError::InvalidEmail);
    }
    if form.message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ContactError::MessageTooShort);
    }
    Ok(())
}

/// `local@domain.tld` shape: one `@` with no whitespace anywhere, and a dot
/// strictly inside the domain.
#[must_use]
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
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    state: SendState,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and start sending. A submit while already sending is dropped
    /// and returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the form stays `Idle`.
    pub fn submit(&mut self, form: &ContactSubmission) -> Result<bool, ContactError> {
        if self.state == SendState::Sending {
            return Ok(false);
        }
        validate(form)?;
        self.state = SendState::Sending;
        log::debug!("contact form accepted, simulating send");
        Ok(true)
    }

    /// Complete the simulated send. Returns the success notice, or `None`
    /// when nothing was in flight.
    pub fn finish(&mut self) -> Option<Notice> {
        if self.state != SendState::Sending {
            return None;
        }
        self.state = SendState::Idle;
        Some(Notice::success(SENT_NOTICE))
    }

    #[must_use]
    pub fn state(&self) -> SendState {
        self.state
    }
}
