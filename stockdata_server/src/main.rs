use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use stockdata_server::{Server, ServerConfig};

#[derive(Parser)]
#[command(name = "stockdata")]
#[command(about = "HTTP passthrough service for marketstack market data")]
struct Cli {
    /// Listen address
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the access key may come from the real environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockdata_server=info".parse().unwrap())
                .add_directive("marketstack_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let access_key = std::env::var("MARKETSTACK_ACCESS_KEY")
        .context("MARKETSTACK_ACCESS_KEY must be set (in the environment or a .env file)")?;
    let base_url = std::env::var("MARKETSTACK_BASE_URL").ok();

    let config = ServerConfig {
        addr: cli.addr,
        access_key,
        base_url,
    };

    Server::new(config)?.run().await
}
