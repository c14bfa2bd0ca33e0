//! # setwebhook-core
//!
//! Registers a webhook URL with the Telegram Bot API: env config, the
//! [`WebhookRegistration`] value, the [`Registrar`] trait and its reqwest
//! implementation, and tracing initialization. Shared by the CLI and the server.

pub mod config;
pub mod error;
pub mod logger;
pub mod registrar;
pub mod registration;

pub use config::{WebhookConfig, DEFAULT_TELEGRAM_API_URL, TOKEN_MISSING_MESSAGE};
pub use error::{Result, WebhookError};
pub use logger::init_tracing;
pub use registrar::{Registrar, TelegramRegistrar, UpstreamResponse};
pub use registration::WebhookRegistration;
