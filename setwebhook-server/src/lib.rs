//! # setwebhook-server
//!
//! Web service exposing the registrar as `GET /set_webhook`, plus `GET /healthz`.
//! The webhook base URL is `EXPOSED_URL` when configured, otherwise the scheme and
//! host the request arrived on.

mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use setwebhook_core::{Registrar, TelegramRegistrar, WebhookConfig};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

pub use routes::{request_base_url, SET_WEBHOOK_PATH, HEALTHZ_PATH};

/// Shared, read-only state for all requests.
pub struct AppState {
    pub config: WebhookConfig,
    pub registrar: Arc<dyn Registrar>,
}

impl AppState {
    pub fn new(config: WebhookConfig, registrar: Arc<dyn Registrar>) -> Self {
        Self { config, registrar }
    }

    /// State backed by the real Bot API client at `config.telegram_api_url`.
    pub fn from_config(config: WebhookConfig) -> setwebhook_core::Result<Self> {
        let registrar = TelegramRegistrar::new(config.telegram_api_url.as_str())?;
        Ok(Self::new(config, Arc::new(registrar)))
    }
}

/// Router with `/set_webhook` and `/healthz`.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(SET_WEBHOOK_PATH, get(routes::set_webhook))
        .route(HEALTHZ_PATH, get(routes::healthz))
        .with_state(state)
}

/// Binds `0.0.0.0:<PORT>` and serves until Ctrl-C.
pub async fn serve(config: WebhookConfig) -> Result<()> {
    if config.token.is_none() {
        warn!("TG_TOKEN is not set; /set_webhook will answer 500 until it is");
    }
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState::from_config(config)?);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Bind {}", addr))?;

    serve_on(listener, state, wait_for_shutdown()).await
}

/// Serves the app on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(state);
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

async fn wait_for_shutdown() {
    signal::ctrl_c().await.ok();
    info!("Shutting down");
}
