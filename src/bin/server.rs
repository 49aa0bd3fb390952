//! HTTP JSON service for the 2048 rules engine.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

use rust_2048::logging;
use rust_2048::service::{router, AppState, RateLimiter};

#[derive(Parser, Debug)]
#[command(version, about = "Stateless 2048 game API")]
struct Args {
    /// Address to listen on
    #[arg(long, env = "R2048_BIND", default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Requests allowed per client per window
    #[arg(long, env = "R2048_RATE_LIMIT", default_value_t = 100)]
    rate_limit: u32,

    /// Rate limit window in seconds
    #[arg(long, env = "R2048_RATE_WINDOW", default_value_t = 60)]
    rate_window: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::setup("info,rust_2048=info")?;
    let args = Args::parse();

    let limiter = RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window));
    let app = router(AppState::new(limiter));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!(addr = %args.bind, rate_limit = args.rate_limit, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")
}
