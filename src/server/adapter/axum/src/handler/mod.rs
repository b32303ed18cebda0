/* src/server/adapter/axum/src/handler/mod.rs */

mod locale;
mod page;


use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get;
use sweetspot_server::{Locale, LocaleResolver, SiteParts};
use tower_http::services::ServeDir;

pub(crate) struct AppState {
  pub resolver: LocaleResolver,
  pub pages: HashMap<Locale, Arc<str>>,
}

pub(crate) fn build_router(parts: SiteParts) -> Router {
  let mut router = Router::new();
  let mut pages = HashMap::new();

  // Only locales with a rendered page get a route; anything else reaches the fallback.
  for page in parts.pages {
    let route = format!("/{}", page.locale);
    router = router
      .route(&route, get(page::handle_page))
      .route(&format!("{route}/"), get(page::handle_page));
    pages.insert(page.locale, Arc::from(page.html));
  }

  let state = Arc::new(AppState { resolver: parts.resolver, pages });

  let router = match parts.public_dir {
    Some(dir) => {
      tracing::debug!(dir = %dir.display(), "serving public files");
      router.fallback_service(ServeDir::new(dir).not_found_service(page::not_found.into_service()))
    }
    None => router.fallback(page::not_found),
  };

  // Added after the fallback so unmatched paths are redirected too.
  router
    .layer(axum::middleware::from_fn_with_state(state.clone(), locale::redirect_to_locale))
    .with_state(state)
}
