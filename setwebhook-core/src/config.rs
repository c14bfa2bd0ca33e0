//! Configuration loaded from environment variables.
//!
//! Reads `TG_TOKEN`, `TELEGRAM_API_URL` and `LOG_FILE`; the server also reads
//! `EXPOSED_URL` and `PORT`. Binaries call `dotenvy::dotenv()` before loading.

use std::env;
use std::fmt;

use crate::error::{Result, WebhookError};

/// Public Bot API base used when `TELEGRAM_API_URL` is not set.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub const DEFAULT_PORT: u16 = 8080;

/// Message used for both the CLI error and the HTTP 500 body when the token is absent.
pub const TOKEN_MISSING_MESSAGE: &str = "TG_TOKEN not set in environment";

#[derive(Clone)]
pub struct WebhookConfig {
    /// TG_TOKEN; `None` when unset or blank. Checked by [`WebhookConfig::require_token`] per operation.
    pub token: Option<String>,
    /// TELEGRAM_API_URL
    pub telegram_api_url: String,
    /// EXPOSED_URL: public origin that overrides the request host in the server.
    pub exposed_url: Option<String>,
    /// PORT
    pub port: u16,
    /// LOG_FILE
    pub log_file: Option<String>,
}

impl WebhookConfig {
    /// Load the settings the registration itself needs: `TG_TOKEN`, `TELEGRAM_API_URL`, `LOG_FILE`.
    /// A missing token is not an error here. `EXPOSED_URL` and `PORT` are not read.
    pub fn load() -> Result<Self> {
        let token = non_empty_var("TG_TOKEN");
        let telegram_api_url = non_empty_var("TELEGRAM_API_URL")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());
        let log_file = non_empty_var("LOG_FILE");

        Ok(Self {
            token,
            telegram_api_url,
            log_file,
            ..Self::default()
        })
    }

    /// [`WebhookConfig::load`] plus the server-only `EXPOSED_URL` and `PORT`.
    pub fn load_server() -> Result<Self> {
        let exposed_url = non_empty_var("EXPOSED_URL");
        let port = match non_empty_var("PORT") {
            Some(s) => s
                .parse()
                .map_err(|_| WebhookError::Config(format!("PORT is not a valid port: {}", s)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            exposed_url,
            port,
            ..Self::load()?
        })
    }

    /// Config with only a token; everything else at its default.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Validate URL-valued settings. Call after load() to fail fast before serving.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.telegram_api_url).is_err() {
            return Err(WebhookError::Config(format!(
                "TELEGRAM_API_URL is set but not a valid URL: {}",
                self.telegram_api_url
            )));
        }
        if let Some(ref url_str) = self.exposed_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(WebhookError::Config(format!(
                    "EXPOSED_URL is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        Ok(())
    }

    /// Returns the token or the configuration error reported to callers.
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| WebhookError::Config(TOKEN_MISSING_MESSAGE.to_string()))
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            token: None,
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            exposed_url: None,
            port: DEFAULT_PORT,
            log_file: None,
        }
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("telegram_api_url", &self.telegram_api_url)
            .field("exposed_url", &self.exposed_url)
            .field("port", &self.port)
            .field("log_file", &self.log_file)
            .finish()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
