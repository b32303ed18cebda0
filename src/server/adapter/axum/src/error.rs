/* src/server/adapter/axum/src/error.rs */

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sweetspot_server::SiteError;

/// JSON error response for site errors (`{ ok: false, error: { code, message } }`).
pub(crate) struct AxumError(pub SiteError);

#[derive(Serialize)]
struct ErrorBody<'a> {
  ok: bool,
  error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
  code: &'a str,
  message: String,
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match status {
      s if s.is_server_error() => tracing::error!(error = %err, "site error"),
      StatusCode::NOT_FOUND => tracing::debug!(error = %err, "no page or asset"),
      _ => tracing::warn!(error = %err, "request rejected"),
    }
    let body = ErrorBody { ok: false, error: ErrorDetail { code: err.code(), message: err.to_string() } };
    (status, Json(body)).into_response()
  }
}

impl From<SiteError> for AxumError {
  fn from(err: SiteError) -> Self {
    Self(err)
  }
}
