//! Runs the real listener on an ephemeral port and stops it through the shutdown future.

use std::sync::Arc;

use anyhow::Result;
use setwebhook_core::WebhookConfig;
use setwebhook_server::{serve_on, AppState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::test]
async fn serve_on_answers_healthz_and_shuts_down() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let state = Arc::new(AppState::from_config(WebhookConfig::default())?);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve_on(listener, state, async move {
        stop_rx.await.ok();
    }));

    let response = reqwest::get(format!("http://{}/healthz", addr)).await?;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await?, r#"{"status":"ok"}"#);

    let missing_token = reqwest::get(format!("http://{}/set_webhook", addr)).await?;
    assert_eq!(missing_token.status().as_u16(), 500);

    stop_tx.send(()).ok();
    server.await??;
    Ok(())
}
