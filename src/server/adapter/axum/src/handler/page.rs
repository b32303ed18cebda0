/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::{MatchedPath, State};
use axum::http::Uri;
use axum::response::Html;
use sweetspot_server::{Locale, SiteError};

use super::AppState;
use crate::error::AxumError;

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
) -> Result<Html<String>, AxumError> {
  let segment = matched.as_str().trim_matches('/');
  let locale: Locale = segment.parse()?;
  let html = state
    .pages
    .get(&locale)
    .ok_or_else(|| SiteError::UnknownLocale(locale.to_string()))?;
  Ok(Html(html.to_string()))
}

pub(super) async fn not_found(uri: Uri) -> AxumError {
  AxumError(SiteError::NotFound(uri.path().to_string()))
}
