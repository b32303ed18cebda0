/* src/server/adapter/axum/src/handler/locale.rs */

use std::borrow::Cow;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use sweetspot_server::{Action, LocaleResolver, RequestContext};

use super::AppState;

/// Locale middleware: redirect unprefixed paths to `/{locale}{path}`.
pub(super) async fn redirect_to_locale(
  State(state): State<Arc<AppState>>,
  request: Request,
  next: Next,
) -> Response {
  match decide(&state.resolver, &request) {
    Action::PassThrough => next.run(request).await,
    Action::RedirectTo(target) => Redirect::temporary(&target).into_response(),
  }
}

fn decide(resolver: &LocaleResolver, request: &Request) -> Action {
  let uri = request.uri();
  if !resolver.in_scope(uri.path()) {
    return Action::PassThrough;
  }

  // Opaque bytes still count as a present value: an unknown country maps to `en`,
  // an unparsable language tag falls back to the default locale.
  let values: Vec<(&str, Cow<'_, str>)> = request
    .headers()
    .iter()
    .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
    .collect();
  let headers = values.iter().map(|(name, value)| (*name, value.as_ref())).collect();
  let ctx = RequestContext { path: uri.path(), query: uri.query(), headers };
  resolver.resolve(&ctx)
}
