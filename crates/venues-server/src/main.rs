//! venues-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) layered with
//! `VENUES_*` environment variables, opens the SQLite store, and serves the
//! HTML pages and JSON API over HTTP.
//!
//! ```text
//! cargo run -p venues-server -- --config config.toml
//! VENUES_PORT=8080 cargo run -p venues-server -- --in-memory
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use venues_server::{AppState, ServerConfig};
use venues_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Venue ratings server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Use a throwaway in-memory database instead of `store_path`.
  #[arg(long)]
  in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("VENUES"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store = if cli.in_memory {
    tracing::warn!("using an in-memory database; data is lost on exit");
    SqliteStore::open_in_memory()
      .await
      .context("failed to open in-memory store")?
  } else {
    let store_path = expand_tilde(&server_cfg.store_path);
    SqliteStore::open(&store_path)
      .await
      .with_context(|| format!("failed to open store at {store_path:?}"))?
  };

  let state = AppState {
    store:  Arc::new(store),
    config: Arc::new(server_cfg.clone()),
  };

  let app = venues_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` or `~/` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  match std::env::var("HOME") {
    Ok(home) => expand_tilde_with(path, &home),
    Err(_) => path.to_path_buf(),
  }
}

fn expand_tilde_with(path: &Path, home: &str) -> PathBuf {
  let s = path.to_string_lossy();
  if s == "~" {
    return PathBuf::from(home);
  }
  if let Some(rest) = s.strip_prefix("~/") {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
