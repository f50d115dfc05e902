//! octofeed: GitHub-style activity event service.
//!
//! Single `serve` subcommand: binds a TCP listener and serves the JSON
//! API (event ingestion, listing, actor ranking) over axum.

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use octofeed_store::EventStore;

#[derive(Parser)]
#[command(name = "octofeed")]
#[command(about = "GitHub-style activity event service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Bind address
        #[arg(long, env = "OCTOFEED_BIND", default_value = "0.0.0.0")]
        bind: String,

        /// HTTP server port
        #[arg(long, env = "OCTOFEED_PORT", default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "octofeed=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, port } => serve(&bind, port).await,
    }
}

async fn serve(bind: &str, port: u16) -> Result<()> {
    let router = octofeed_web::create_router(EventStore::new());

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, port))
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    tracing::info!("octofeed listening on http://{}:{}", bind, port);

    axum::serve(listener, router)
        .await
        .map_err(|e| miette::miette!("{}", e))?;

    Ok(())
}
