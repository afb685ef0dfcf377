//! CLI entry point for the rollcall HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use rollcall_core::{EventStore, MemoryStore};
use rollcall_graph::{GraphClient, GraphConfig};

use rollcall_api::config::{ServerConfig, StoreBackend};

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "CRUD API for events and attendees backed by Neo4j")]
struct Cli {
    /// Port to listen on (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Store backend: graph, memory (overrides config).
    #[arg(short, long)]
    backend: Option<StoreBackend>,

    /// Config file prefix (default: rollcall).
    #[arg(short, long, default_value = "rollcall")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let cfg = load_config(&cli.config)?;
    let mut server_config = ServerConfig::from_config(&cfg);
    if let Some(port) = cli.port {
        server_config.port = port;
    }
    if let Some(backend) = cli.backend {
        server_config.backend = backend;
    }

    let store: Arc<dyn EventStore> = match server_config.backend {
        StoreBackend::Graph => {
            let graph = GraphClient::connect(&read_graph_config(&cfg)).await?;
            graph.verify_connectivity().await?;
            Arc::new(graph)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            if server_config.preload_sample {
                Arc::new(MemoryStore::with_sample())
            } else {
                Arc::new(MemoryStore::new())
            }
        }
    };

    let addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, backend = ?server_config.backend, "Server listening");

    axum::serve(listener, rollcall_api::app(store)).await?;

    Ok(())
}

fn load_config(file_prefix: &str) -> anyhow::Result<config::Config> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("ROLLCALL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    Ok(cfg)
}

fn read_graph_config(cfg: &config::Config) -> GraphConfig {
    let defaults = GraphConfig::default();
    GraphConfig {
        uri: cfg.get_string("neo4j.uri").unwrap_or(defaults.uri),
        user: cfg.get_string("neo4j.user").unwrap_or(defaults.user),
        password: cfg.get_string("neo4j.password").unwrap_or(defaults.password),
        ..GraphConfig::default()
    }
}
