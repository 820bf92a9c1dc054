use anyhow::bail;
use clap::Parser;
use quiver_server::{FilterServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "quiver-server",
    about = "Mock GraphQL server answering getFilterOptions from a static table after an artificial delay"
)]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 4000)]
    port: u16,

    /// Lower bound of the artificial delay, in milliseconds (inclusive).
    #[arg(long, default_value_t = 1000)]
    min_delay_ms: u64,

    /// Upper bound of the artificial delay, in milliseconds (exclusive).
    #[arg(long, default_value_t = 2000)]
    max_delay_ms: u64
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    if args.min_delay_ms >= args.max_delay_ms {
        bail!(
            "--min-delay-ms ({}) must be less than --max-delay-ms ({})",
            args.min_delay_ms,
            args.max_delay_ms
        );
    }

    let server = FilterServer::bind(ServerConfig {
        port: args.port,
        delay_ms: args.min_delay_ms..args.max_delay_ms
    })
    .await?;

    server.run().await?;
    Ok(())
}
