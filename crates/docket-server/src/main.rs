//! docket-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), seeds an
//! in-memory case store, and serves the Docket JSON API over HTTP.
//!
//! Every setting can also be supplied through the environment with a
//! `DOCKET_` prefix, e.g. `DOCKET_PORT=9000`.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use clap::Parser;
use docket_api::SessionRegistry;
use docket_core::Docket;
use docket_store_memory::MemoryStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Docket court-case tracking server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:              String,
  #[serde(default = "default_port")]
  port:              u16,
  /// Load the three demonstration cases at startup.
  #[serde(default = "default_seed")]
  seed_sample_cases: bool,
  /// Seconds a login token stays valid.
  #[serde(default = "default_session_ttl")]
  session_ttl_secs:  u64,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 8080 }

fn default_seed() -> bool { true }

fn default_session_ttl() -> u64 { docket_api::session::DEFAULT_SESSION_TTL.as_secs() }

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("DOCKET"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store = if server_cfg.seed_sample_cases {
    MemoryStore::seeded()
  } else {
    MemoryStore::new()
  };
  let docket = Arc::new(Docket::new(store));

  let sessions = Arc::new(SessionRegistry::with_ttl(Duration::from_secs(
    server_cfg.session_ttl_secs,
  )));

  let app = docket_api::api_router_with_sessions(docket, sessions)
    .layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!(
    seeded = server_cfg.seed_sample_cases,
    session_ttl_secs = server_cfg.session_ttl_secs,
    "Listening on http://{address}"
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
