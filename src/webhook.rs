use crate::form::ResultView;
use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

/// Where submissions go. There is no response body contract, only the status.
pub const WEBHOOK_URL: &str =
    "http://localhost:5678/webhook-test/e0727839-8b03-4b9b-bbcc-fdee2e52992f";

pub const USER_AGENT: &str = concat!("ytnotes/", env!("CARGO_PKG_VERSION"));

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// One submission, built fresh per attempt from already-validated values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub email: String,
    pub playlist_url: String,
    pub timestamp: String,
    pub user_agent: String,
}

impl SubmissionRequest {
    #[must_use]
    pub fn new(email: String, playlist_url: String) -> Self {
        Self {
            email,
            playlist_url,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: String::from(USER_AGENT),
        }
    }
}

/// Any failure of the outbound call. The user sees the same generic message
/// either way; the distinction only reaches the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("webhook responded with status {0}")]
    Status(u16),
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// What a successful submission tells the user.
#[derive(Debug, Clone)]
pub struct SuccessInfo {
    pub email: String,
}

/// Sends one submission to the webhook. Exactly one attempt; no retries, and
/// no timeout beyond the transport's own default.
pub async fn submit(request: SubmissionRequest) -> Result<SuccessInfo, SubmitError> {
    log::info!("sending submission for {} to {WEBHOOK_URL}", request.email);

    let outcome = post(WEBHOOK_URL, &request).await;
    if let Err(err) = &outcome {
        log::error!("webhook request failed: {err}");
    }
    outcome
}

async fn post(url: &str, request: &SubmissionRequest) -> Result<SuccessInfo, SubmitError> {
    let response = CLIENT.post(url).json(request).send().await?;

    let status = response.status();
    if status.is_success() {
        Ok(SuccessInfo {
            email: request.email.clone(),
        })
    } else {
        Err(SubmitError::Status(status.as_u16()))
    }
}

/// Renders a finished submission into the result region. Pure; the transport
/// call and this mapping are deliberately separate.
#[must_use]
pub fn outcome_view(outcome: &Result<SuccessInfo, SubmitError>) -> ResultView {
    match outcome {
        Ok(info) => ResultView::Success(format!(
            "Your request has been sent successfully! \
             You will receive your notes in a zip file via {} shortly.",
            info.email
        )),
        Err(_) => ResultView::Error(String::from(
            "Oops! Something went wrong. We couldn't connect to the server. \
             Please try again in a moment.",
        )),
    }
}
