//! Registrar abstraction for the `setWebhook` call.
//!
//! [`Registrar`] is transport-agnostic; [`TelegramRegistrar`] implements it with reqwest
//! against the Bot API. Callers get Telegram's status and body back untouched.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::error::{Result, WebhookError};
use crate::registration::WebhookRegistration;

/// Registers a webhook URL. Implementations make exactly one attempt per call.
#[async_trait]
pub trait Registrar: Send + Sync {
    async fn register(&self, registration: &WebhookRegistration) -> Result<UpstreamResponse>;
}

/// What Telegram answered, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Telegram's `ok` field when the body is a JSON object carrying one.
    pub fn ok_flag(&self) -> Option<bool> {
        self.json()?.get("ok")?.as_bool()
    }

    /// Pretty-printed JSON when possible, the raw body otherwise.
    pub fn pretty_body(&self) -> String {
        self.json()
            .and_then(|v| serde_json::to_string_pretty(&v).ok())
            .unwrap_or_else(|| self.body.clone())
    }
}

/// reqwest-based implementation of [`Registrar`] for the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramRegistrar {
    client: Client,
    api_url: String,
}

impl TelegramRegistrar {
    /// Creates a registrar for the given Bot API base (e.g. `https://api.telegram.org`).
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| WebhookError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `<api_url>/bot<token>/setWebhook`. Contains the token: never log it.
    fn endpoint(&self, token: &str) -> String {
        format!("{}/bot{}/setWebhook", self.api_url, token)
    }
}

#[async_trait]
impl Registrar for TelegramRegistrar {
    #[instrument(skip_all, fields(base_url = %registration.base_url()))]
    async fn register(&self, registration: &WebhookRegistration) -> Result<UpstreamResponse> {
        if !registration.is_https() {
            warn!("base_url is not HTTPS; Telegram will likely reject this webhook");
        }

        let webhook_url = registration.webhook_url();
        let response = self
            .client
            .post(self.endpoint(registration.token()))
            .form(&[("url", webhook_url.as_str())])
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        let upstream = UpstreamResponse {
            status,
            content_type,
            body,
        };
        info!(
            status = upstream.status,
            ok = ?upstream.ok_flag(),
            "setWebhook answered"
        );
        Ok(upstream)
    }
}
