/* src/server/core/rust/src/errors.rs */

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
  #[error("unsupported locale \"{0}\"")]
  UnknownLocale(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("invalid locale config: {0}")]
  InvalidConfig(String),

  #[error("invalid language tag \"{0}\" in Accept-Language")]
  InvalidLanguageTag(String),

  #[error("dictionary not found at {}", .0.display())]
  DictionaryMissing(PathBuf),

  #[error("failed to read {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse dictionary {}: {source}", .path.display())]
  DictionaryParse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

impl SiteError {
  /// Stable machine-readable code, used in HTTP error bodies.
  pub fn code(&self) -> &'static str {
    match self {
      Self::UnknownLocale(_) | Self::NotFound(_) => "NOT_FOUND",
      Self::InvalidConfig(_) | Self::InvalidLanguageTag(_) => "VALIDATION_ERROR",
      Self::DictionaryMissing(_) | Self::Io { .. } | Self::DictionaryParse { .. } => {
        "INTERNAL_ERROR"
      }
    }
  }

  pub fn status(&self) -> u16 {
    match self.code() {
      "VALIDATION_ERROR" => 400,
      "NOT_FOUND" => 404,
      _ => 500,
    }
  }
}

pub type Result<T> = std::result::Result<T, SiteError>;
