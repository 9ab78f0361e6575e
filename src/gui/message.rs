use crate::webhook::{SubmitError, SuccessInfo};

/// Everything the form controller reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    EmailInputChanged(String),
    UrlInputChanged(String),
    /// Enter pressed in the email field; validates it ahead of submit.
    EmailBlurred,
    UrlBlurred,
    SubmitForm,
    SubmissionFinished(Result<SuccessInfo, SubmitError>),
    /// The "Process another playlist" control.
    ResetForm,
}
