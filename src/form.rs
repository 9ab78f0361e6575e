use crate::validate::{is_valid_email, is_valid_playlist_url};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const URL_REQUIRED: &str = "YouTube playlist URL is required";
pub const URL_INVALID: &str = "Please enter a valid YouTube playlist URL";

/// Validation status of one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Never validated, or cleared since the last failed validation.
    #[default]
    Untouched,
    Valid,
    Invalid(&'static str),
}

/// One text input plus its validation status.
#[derive(Debug, Default)]
pub struct Field {
    pub value: String,
    pub state: FieldState,
}

impl Field {
    /// Replaces the field's text. A visible error is dropped the instant the
    /// user types again; the new text isn't judged until the next blur or
    /// submit. A `Valid` mark stays put.
    pub fn input(&mut self, value: String) {
        self.value = value;
        if matches!(self.state, FieldState::Invalid(_)) {
            self.state = FieldState::Untouched;
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        match self.state {
            FieldState::Invalid(message) => Some(message),
            FieldState::Untouched | FieldState::Valid => None,
        }
    }
}

/// What the result region is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Hidden,
    Processing,
    Success(String),
    Error(String),
}

/// All state owned by the form controller.
#[derive(Debug, Default)]
pub struct FormState {
    pub email: Field,
    pub playlist_url: Field,
    pub result: ResultView,
}

impl FormState {
    pub fn blur_email(&mut self) {
        self.email.state = check_email(&self.email.value);
    }

    pub fn blur_playlist_url(&mut self) {
        self.playlist_url.state = check_playlist_url(&self.playlist_url.value);
    }

    /// Re-validates both fields from scratch, regardless of any earlier
    /// result, so both errors show up together on a bad submit. Returns
    /// whether the form may be submitted.
    pub fn validate_all(&mut self) -> bool {
        self.blur_email();
        self.blur_playlist_url();
        self.email.state == FieldState::Valid && self.playlist_url.state == FieldState::Valid
    }

    /// Puts everything back to Untouched/Hidden, the state of a fresh page.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[must_use]
pub fn check_email(value: &str) -> FieldState {
    let value = value.trim();
    if value.is_empty() {
        FieldState::Invalid(EMAIL_REQUIRED)
    } else if is_valid_email(value) {
        FieldState::Valid
    } else {
        FieldState::Invalid(EMAIL_INVALID)
    }
}

#[must_use]
pub fn check_playlist_url(value: &str) -> FieldState {
    let value = value.trim();
    if value.is_empty() {
        FieldState::Invalid(URL_REQUIRED)
    } else if is_valid_playlist_url(value) {
        FieldState::Valid
    } else {
        FieldState::Invalid(URL_INVALID)
    }
}
