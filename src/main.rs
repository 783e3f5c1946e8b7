use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use taskd::{config::ServerConfig, rest, store::TaskStore, AppContext};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "taskd",
    about = "taskd — in-memory task tracking service with a REST API",
    version
)]
struct Args {
    /// REST API port
    #[arg(long, env = "TASKD_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "TASKD_BIND")]
    bind_address: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKD_LOG")]
    log: Option<String>,

    /// Log format: "pretty" (human-readable) or "json" (for log aggregators)
    #[arg(long, env = "TASKD_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServerConfig::new(args.port, args.bind_address, args.log);

    setup_logging(&config.log_level, &args.log_format);
    info!(version = env!("CARGO_PKG_VERSION"), "starting taskd");

    let ctx = Arc::new(AppContext {
        config: Arc::new(config),
        store: Arc::new(TaskStore::new()),
        started_at: std::time::Instant::now(),
    });

    rest::start_rest_server(ctx).await
}

/// Initialize the tracing subscriber.
///
/// `log_format` may be `"pretty"` (default, compact human-readable format)
/// or `"json"` (structured JSON for log aggregators).
fn setup_logging(log_level: &str, log_format: &str) {
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(log_level)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(log_level)
            .compact()
            .init();
    }
}
