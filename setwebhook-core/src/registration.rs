//! The webhook registration value: token + base URL, and the URL derived from them.

use std::fmt;

use crate::error::{Result, WebhookError};

/// One registration request. Built, used for a single `setWebhook` call, dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookRegistration {
    token: String,
    base_url: String,
}

impl WebhookRegistration {
    /// Both values must be non-empty after trimming whitespace.
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();
        let base_url = base_url.into().trim().to_string();
        if token.is_empty() {
            return Err(WebhookError::Config(
                crate::config::TOKEN_MISSING_MESSAGE.to_string(),
            ));
        }
        if base_url.is_empty() {
            return Err(WebhookError::Config("base_url is required".to_string()));
        }
        Ok(Self { token, base_url })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base_url>/<token>`. Trailing slashes on the base are dropped so the join is a single `/`.
    pub fn webhook_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.token)
    }

    /// Telegram only delivers to HTTPS webhooks; this is informational and not enforced.
    pub fn is_https(&self) -> bool {
        self.base_url
            .get(..8)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
    }
}

impl fmt::Debug for WebhookRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookRegistration")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
