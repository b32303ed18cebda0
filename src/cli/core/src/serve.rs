/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{Result, anyhow};
use sweetspot_server::SiteServer;
use sweetspot_server_axum::IntoAxumRouter;

use crate::build::render_pages;
use crate::config::SiteConfig;
use crate::ui;

/// Port precedence: `--port`, then `$PORT`, then `server.port`.
pub fn resolve_port(cli_port: Option<u16>, env_port: Option<&str>) -> Option<u16> {
  cli_port.or_else(|| env_port.and_then(|p| p.trim().parse().ok()))
}

pub async fn run_serve(config: &SiteConfig, base_dir: &Path, port: Option<u16>) -> Result<()> {
  let env_port = std::env::var("PORT").ok();
  let addr = config.bind_addr(resolve_port(port, env_port.as_deref()))?;
  let locale_config = config.locale_config()?;
  let pages = render_pages(config, base_dir)?;

  let mut server = SiteServer::new(locale_config.clone()).pages(pages);
  let public_dir = config.public_dir(base_dir);
  if public_dir.is_dir() {
    server = server.public_dir(public_dir);
  } else {
    tracing::warn!(dir = %public_dir.display(), "public dir not found, static assets disabled");
  }

  let locales: Vec<&str> = locale_config.locales().iter().map(|l| l.as_str()).collect();
  ui::banner("serve");
  ui::label("locales", &locales.join(", "));
  ui::label("default", locale_config.default_locale().as_str());
  ui::label("listen", &format!("http://{addr}"));
  ui::blank();

  tracing::info!(
    project = %config.project.name,
    %addr,
    default = %locale_config.default_locale(),
    "starting site server"
  );
  server.serve(&addr).await.map_err(|e| anyhow!("server error: {e}"))
}
