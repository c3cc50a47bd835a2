//! Vault binary entrypoint: HTTP ingestion in front of a disk archiver.

use actix_web::{guard, web, App, HttpServer};
use clap::Parser;
use tracing_subscriber::prelude::*;

#[derive(clap::Parser)]
#[command(version)]
pub struct Cli {
    /// HTTP listen address
    #[arg(short = 'l', long = "listen", default_value = "127.0.0.1:8080")]
    pub listen_addr: std::net::SocketAddr,

    /// Directory where received skin records are written
    #[arg(long = "archive-dir", default_value = "archive")]
    pub archive_directory: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let cli_args = Cli::parse();

    let (tx, rx): (
        tokio::sync::mpsc::Sender<records::SkinUpload>,
        tokio::sync::mpsc::Receiver<records::SkinUpload>,
    ) = tokio::sync::mpsc::channel(64);

    log::info!("Launching archive queue processor...");
    tokio::spawn(vault::archive::archive_received_records(
        rx,
        cli_args.archive_directory.clone(),
    ));

    log::info!("Launching vault on {}", cli_args.listen_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(web::Data::new(tx.clone()))
            .route(
                "/skins",
                web::post()
                    .guard(guard::Header("Content-Type", "application/json"))
                    .to(vault::http::post_handler),
            )
    })
    .workers(1)
    .bind(&cli_args.listen_addr)?
    .run()
    .await
}
