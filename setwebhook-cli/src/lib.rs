//! # setwebhook-cli
//!
//! Command form of the registrar: `set-webhook <base_url>`, token from `TG_TOKEN`.

pub mod cli;

pub use cli::{run, usage, Cli, Outcome};
