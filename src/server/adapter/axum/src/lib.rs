/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use sweetspot_server::SiteServer;

/// Re-export the core crate for convenience
pub use sweetspot_server;

/// Extension trait that converts a `SiteServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for SiteServer {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.into_parts())
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "site server listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn into_axum_router_builds_without_panic() {
    let server = SiteServer::default();
    let _router = server.into_axum_router();
  }
}
