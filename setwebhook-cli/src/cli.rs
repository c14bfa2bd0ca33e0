//! CLI parser and the single registration run.

use clap::{CommandFactory, Parser};
use setwebhook_core::{Registrar, Result, UpstreamResponse, WebhookConfig, WebhookRegistration};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "set-webhook")]
#[command(about = "Register <base_url>/<TG_TOKEN> as the Telegram bot webhook", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Public HTTPS origin that will receive updates, e.g. https://bot.example.com
    pub base_url: Option<String>,
}

/// Result of one invocation, before anything is printed.
#[derive(Debug)]
pub enum Outcome {
    /// No base URL given.
    Usage,
    /// TG_TOKEN absent; carries the message to print.
    MissingToken(String),
    /// Telegram answered (any status).
    Response(UpstreamResponse),
}

impl Outcome {
    /// 0 only when Telegram answered with a 2xx status.
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Response(r) if r.is_success() => 0,
            _ => 1,
        }
    }
}

/// Usage line rendered by clap, e.g. `Usage: set-webhook [BASE_URL]`.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Checks inputs, then makes one `setWebhook` call. Nothing reaches the registrar
/// unless both the base URL and the token are present.
pub async fn run(cli: Cli, config: &WebhookConfig, registrar: &dyn Registrar) -> Result<Outcome> {
    let base_url = match cli.base_url.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => return Ok(Outcome::Usage),
    };
    let token = match config.require_token() {
        Ok(token) => token,
        Err(e) => return Ok(Outcome::MissingToken(e.to_string())),
    };

    let registration = WebhookRegistration::new(token, base_url)?;
    info!(base_url = %registration.base_url(), "Registering webhook");
    let response = registrar.register(&registration).await?;
    Ok(Outcome::Response(response))
}
