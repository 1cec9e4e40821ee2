//! Service entry point: configuration, logging, and server startup.

mod server;

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::web;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use server::ServerConfig;

/// Command-line and environment configuration.
#[derive(Debug, Parser)]
#[command(about = "Dog-breed catalogue and favourites service")]
struct Cli {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: SocketAddr,
    /// Path to the breeds JSON dataset.
    #[arg(long, env = "BREEDS_FILE", default_value = "data/dogs.json")]
    breeds_file: PathBuf,
    /// Path to the favourites JSON store.
    #[arg(long, env = "FAVORITES_FILE", default_value = "data/favs.json")]
    favorites_file: PathBuf,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let config = ServerConfig::new(cli.bind_addr, cli.breeds_file, cli.favorites_file);

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, config)?;
    server.await
}
