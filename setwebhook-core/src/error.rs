//! Error types for webhook registration.
//!
//! Only two things can go wrong locally: the configuration is incomplete, or the
//! request never got a response from Telegram. A non-2xx answer from Telegram is
//! not an error here; it is returned to the caller as an [`UpstreamResponse`](crate::UpstreamResponse).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    /// Missing token or base URL, or an invalid URL in the environment. Never sent upstream.
    #[error("Config error: {0}")]
    Config(String),

    /// Transport failure talking to the Bot API (connect, TLS, timeout, body read).
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl WebhookError {
    pub fn is_config(&self) -> bool {
        matches!(self, WebhookError::Config(_))
    }
}

impl From<reqwest::Error> for WebhookError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest includes the request URL in its Display, and that URL carries the token.
        WebhookError::Upstream(e.without_url().to_string())
    }
}

pub type Result<T> = std::result::Result<T, WebhookError>;
