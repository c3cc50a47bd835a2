//! Collector binary entrypoint.
//!
//! Parses CLI arguments and hands control to `collector::commands::Cli`.
//! The binary is intentionally a thin wrapper: configuration loading, sink
//! construction and the session listener live in the library crate.

use clap::Parser;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> collector::error::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    collector::commands::Cli::parse().handle().await
}
