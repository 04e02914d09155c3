use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::contact::ContactSubmission;

#[derive(Debug, Error)]
pub enum RelayError {
    /// The endpoint answered with a non-success status. Carries the
    /// endpoint's own error messages when it provided any.
    #[error("Submission error: {0}")]
    Rejected(String),
    #[error("Network error. Please check your connection and try again.")]
    Network(#[from] reqwest::Error),
}

/// Error body shape returned by the form relay service.
#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayErrorItem>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorItem {
    message: String,
}

/// Forwards validated contact submissions to the third-party form relay.
/// One attempt per submission, no retries.
#[derive(Clone)]
pub struct FormRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl FormRelay {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(submission)
            .send()
            .await?;

        if response.status().is_success() {
            debug!("contact submission relayed to {}", self.endpoint);
            return Ok(());
        }

        let message = match response.json::<RelayErrorBody>().await {
            Ok(body) if !body.errors.is_empty() => body
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join(", "),
            _ => "Something went wrong. Please try again.".to_string(),
        };
        Err(RelayError::Rejected(message))
    }
}
