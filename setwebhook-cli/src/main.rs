//! set-webhook: register `<base_url>/<TG_TOKEN>` with the Telegram Bot API and print the answer.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use setwebhook_cli::{run, usage, Cli, Outcome};
use setwebhook_core::{init_tracing, TelegramRegistrar, WebhookConfig};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn execute(cli: Cli) -> Result<ExitCode> {
    let config = WebhookConfig::load()?;
    config.validate()?;
    init_tracing(config.log_file.as_deref()).context("Initialize logging")?;

    let registrar = TelegramRegistrar::new(config.telegram_api_url.as_str())?;
    let outcome = run(cli, &config, &registrar).await?;

    match &outcome {
        Outcome::Usage => eprintln!("{}", usage()),
        Outcome::MissingToken(msg) => {
            eprintln!("{}", msg);
            eprintln!("{}", usage());
        }
        Outcome::Response(response) => println!("{}", response.pretty_body()),
    }
    Ok(ExitCode::from(outcome.exit_status()))
}
