//! ts3gsi-monitor: stand-in for the Aurora receiver.
//!
//! Listens where the plugin posts its state documents and logs a summary
//! of each one, so the plugin can be exercised without Aurora running.

mod protocol;
mod receiver;

use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use ts3gsi_common::Result;

use crate::receiver::{serve, ReceiverState};

#[derive(Parser)]
#[command(name = "ts3gsi-monitor", about = "Log state documents posted by the TeamSpeak GSI plugin")]
struct Args {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 9088)]
    port: u16,

    /// Address to bind.
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Maximum time to read one request body, in milliseconds.
    #[arg(long, default_value_t = 5000)]
    body_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ts3gsi_monitor=info".into()),
        )
        .init();

    let args = Args::parse();
    let addr = format!("{}:{}", args.bind, args.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("ts3gsi-monitor listening on http://{}", addr);

    let state = ReceiverState {
        body_timeout: Duration::from_millis(args.body_timeout_ms),
    };
    serve(listener, state).await?;
    Ok(())
}
