/* src/cli/core/src/main.rs */

mod build;
mod config;
mod resolve;
mod serve;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{SiteConfig, find_site_config, load_site_config};

#[derive(Parser)]
#[command(name = "sweetspot", about = "Sweet Spot multi-locale site CLI")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Render one static page per locale into the output directory
  Build {
    /// Path to sweetspot.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Serve the locale pages behind the locale redirect middleware
  Serve {
    /// Path to sweetspot.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Listen port (overrides $PORT and server.port)
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Show what the locale middleware does for a request
  Resolve {
    /// Request path, optionally with a query string (e.g. /contact?x=1)
    path: String,
    /// Request header as name=value; repeatable
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,
    /// Path to sweetspot.toml (built-in defaults if omitted and none is found)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, SiteConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_site_config(&cwd)?
    }
  };
  let config = load_site_config(&path)?;
  Ok((path, config))
}

/// Try to load sweetspot.toml from cwd upward; returns None if not found
fn try_load_config() -> Option<SiteConfig> {
  let cwd = std::env::current_dir().ok()?;
  let path = find_site_config(&cwd).ok()?;
  load_site_config(&path).ok()
}

fn base_dir(config_path: &Path) -> PathBuf {
  config_path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

#[tokio::main]
async fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  match cli.command {
    Command::Build { config } => {
      let (path, config) = resolve_config(config)?;
      build::run_build(&config, &base_dir(&path))?;
    }
    Command::Serve { config, port } => {
      let (path, config) = resolve_config(config)?;
      serve::run_serve(&config, &base_dir(&path), port).await?;
    }
    Command::Resolve { path, headers, config } => {
      let site = match config {
        Some(p) => load_site_config(&p)?,
        None => try_load_config().unwrap_or_default(),
      };
      let headers =
        headers.iter().map(|h| resolve::parse_header(h)).collect::<Result<Vec<_>>>()?;
      let outcome = resolve::describe(site.locale_config()?, &path, &headers);
      ui::label("path", &path);
      ui::label("result", &outcome);
    }
  }

  Ok(())
}
