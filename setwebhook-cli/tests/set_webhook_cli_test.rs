//! End-to-end tests for the `set-webhook` binary against a mock Bot API.
//!
//! Every command clears the relevant env vars so a developer's shell does not leak in.

use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;

const TEST_TOKEN: &str = "123456:CLI-test";

fn set_webhook() -> Command {
    let mut cmd = Command::cargo_bin("set-webhook").unwrap();
    cmd.env_remove("TG_TOKEN")
        .env_remove("TELEGRAM_API_URL")
        .env_remove("EXPOSED_URL")
        .env_remove("LOG_FILE")
        .env_remove("PORT")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_missing_base_url_prints_usage_and_exits_one() {
    set_webhook()
        .env("TG_TOKEN", TEST_TOKEN)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage: set-webhook"));
}

#[test]
fn test_missing_token_exits_one_without_request() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create();

    set_webhook()
        .env("TELEGRAM_API_URL", server.url())
        .arg("https://bot.example.com")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("TG_TOKEN not set in environment"));

    mock.assert();
}

#[test]
fn test_success_prints_pretty_response() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", format!("/bot{}/setWebhook", TEST_TOKEN).as_str())
        .match_body(Matcher::UrlEncoded(
            "url".into(),
            format!("https://bot.example.com/{}", TEST_TOKEN),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true,"result":true}"#)
        .create();

    set_webhook()
        .env("TG_TOKEN", TEST_TOKEN)
        .env("TELEGRAM_API_URL", server.url())
        .arg("https://bot.example.com")
        .assert()
        .success()
        .stdout("{\n  \"ok\": true,\n  \"result\": true\n}\n");

    mock.assert();
}

#[test]
fn test_upstream_rejection_is_printed_and_exits_one() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", format!("/bot{}/setWebhook", TEST_TOKEN).as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":false,"description":"Bad Request: bad webhook"}"#)
        .create();

    set_webhook()
        .env("TG_TOKEN", TEST_TOKEN)
        .env("TELEGRAM_API_URL", server.url())
        .arg("https://bot.example.com")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Bad Request: bad webhook"));

    mock.assert();
}

#[test]
fn test_token_never_written_to_output() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", format!("/bot{}/setWebhook", TEST_TOKEN).as_str())
        .with_status(200)
        .with_body(r#"{"ok":true,"result":true}"#)
        .create();

    set_webhook()
        .env("TG_TOKEN", TEST_TOKEN)
        .env("TELEGRAM_API_URL", server.url())
        .env("RUST_LOG", "setwebhook_core=debug,setwebhook_cli=debug")
        .arg("http://plain-http.example")
        .assert()
        .success()
        .stderr(predicate::str::contains(TEST_TOKEN).not());
}

#[test]
fn test_server_only_settings_do_not_affect_cli() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", format!("/bot{}/setWebhook", TEST_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true,"result":true}"#)
        .create();

    set_webhook()
        .env("TG_TOKEN", TEST_TOKEN)
        .env("TELEGRAM_API_URL", server.url())
        .env("PORT", "$PORT")
        .env("EXPOSED_URL", "not a url")
        .arg("https://bot.example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\": true"));

    mock.assert();
}
