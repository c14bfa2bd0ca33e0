use anyhow::Result;
use setwebhook_core::{init_tracing, WebhookConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = WebhookConfig::load_server()?;
    config.validate()?;
    init_tracing(config.log_file.as_deref())?;

    setwebhook_server::serve(config).await
}
