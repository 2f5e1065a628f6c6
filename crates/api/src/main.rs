//! Users API - HTTP CRUD service over an in-memory user store.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_lib::config::ApiConfig;

#[derive(Parser)]
#[command(name = "users-api")]
#[command(about = "HTTP API for managing users")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (defaults to API_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (defaults to API_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Start with an empty store instead of the demo users
        #[arg(long)]
        no_seed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,tower_http=debug".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ApiConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_seed,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if no_seed {
                config.repository.seed_users = false;
            }

            if let Err(e) = api_lib::run(config).await {
                tracing::error!("Server failed: {:?}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
