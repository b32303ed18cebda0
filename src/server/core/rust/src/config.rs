/* src/server/core/rust/src/config.rs */

use std::collections::HashSet;

use crate::errors::{Result, SiteError};
use crate::locale::Locale;

pub const DEFAULT_LOCALE: Locale = Locale::Ja;

/// Public files that are never locale-prefixed.
pub const DEFAULT_ASSET_PREFIXES: &[&str] = &["/images/", "/logo.png", "/next.svg", "/vercel.svg"];

/// Geo headers in lookup order: Vercel first, then Cloudflare.
pub const DEFAULT_GEO_HEADERS: &[&str] = &["x-vercel-ip-country", "cf-ipcountry"];

/// Path heads (after the leading `/`) the middleware never runs for.
pub const DEFAULT_MATCHER_EXCLUDES: &[&str] = &["_next", "api", "favicon.ico"];

/// Process-wide locale routing configuration. Built once at startup and
/// shared read-only; there is no way to mutate it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
  locales: Vec<Locale>,
  default: Locale,
  asset_prefixes: Vec<String>,
  geo_headers: Vec<String>,
  matcher_excludes: Vec<String>,
}

impl LocaleConfig {
  pub fn new(locales: Vec<Locale>, default: Locale) -> Result<Self> {
    Self::builder(locales, default).build()
  }

  pub fn builder(locales: Vec<Locale>, default: Locale) -> LocaleConfigBuilder {
    LocaleConfigBuilder {
      locales,
      default,
      asset_prefixes: to_strings(DEFAULT_ASSET_PREFIXES),
      geo_headers: to_strings(DEFAULT_GEO_HEADERS),
      matcher_excludes: to_strings(DEFAULT_MATCHER_EXCLUDES),
    }
  }

  pub fn locales(&self) -> &[Locale] {
    &self.locales
  }

  pub fn default_locale(&self) -> Locale {
    self.default
  }

  pub fn supports(&self, locale: Locale) -> bool {
    self.locales.contains(&locale)
  }

  pub fn asset_prefixes(&self) -> &[String] {
    &self.asset_prefixes
  }

  pub fn geo_headers(&self) -> &[String] {
    &self.geo_headers
  }

  pub fn matcher_excludes(&self) -> &[String] {
    &self.matcher_excludes
  }
}

impl Default for LocaleConfig {
  fn default() -> Self {
    Self {
      locales: Locale::ALL.to_vec(),
      default: DEFAULT_LOCALE,
      asset_prefixes: to_strings(DEFAULT_ASSET_PREFIXES),
      geo_headers: to_strings(DEFAULT_GEO_HEADERS),
      matcher_excludes: to_strings(DEFAULT_MATCHER_EXCLUDES),
    }
  }
}

pub struct LocaleConfigBuilder {
  locales: Vec<Locale>,
  default: Locale,
  asset_prefixes: Vec<String>,
  geo_headers: Vec<String>,
  matcher_excludes: Vec<String>,
}

impl LocaleConfigBuilder {
  pub fn asset_prefixes(mut self, prefixes: Vec<String>) -> Self {
    self.asset_prefixes = prefixes;
    self
  }

  pub fn geo_headers(mut self, headers: Vec<String>) -> Self {
    self.geo_headers = headers;
    self
  }

  pub fn matcher_excludes(mut self, excludes: Vec<String>) -> Self {
    self.matcher_excludes = excludes;
    self
  }

  pub fn build(self) -> Result<LocaleConfig> {
    if self.locales.is_empty() {
      return Err(SiteError::InvalidConfig("locales must not be empty".into()));
    }
    let mut seen = HashSet::new();
    for locale in &self.locales {
      if !seen.insert(*locale) {
        return Err(SiteError::InvalidConfig(format!("duplicate locale \"{locale}\"")));
      }
    }
    if !self.locales.contains(&self.default) {
      return Err(SiteError::InvalidConfig(format!(
        "default locale \"{}\" is not in locales",
        self.default
      )));
    }
    if let Some(bad) = self.asset_prefixes.iter().find(|p| !p.starts_with('/')) {
      return Err(SiteError::InvalidConfig(format!("asset prefix \"{bad}\" must start with '/'")));
    }
    if self.geo_headers.iter().any(|h| h.trim().is_empty()) {
      return Err(SiteError::InvalidConfig("geo header names must not be empty".into()));
    }

    Ok(LocaleConfig {
      locales: self.locales,
      default: self.default,
      asset_prefixes: self.asset_prefixes,
      // HTTP header names are case-insensitive; store them lowercased once.
      geo_headers: self.geo_headers.into_iter().map(|h| h.trim().to_ascii_lowercase()).collect(),
      matcher_excludes: self.matcher_excludes,
    })
  }
}

fn to_strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_matches_site_setup() {
    let config = LocaleConfig::default();
    assert_eq!(config.locales(), &[Locale::En, Locale::Ja, Locale::Zh]);
    assert_eq!(config.default_locale(), Locale::Ja);
    assert_eq!(config.geo_headers(), &["x-vercel-ip-country", "cf-ipcountry"]);
    assert_eq!(config.asset_prefixes().len(), 4);
  }

  #[test]
  fn new_equals_default_for_same_inputs() {
    let config = LocaleConfig::new(Locale::ALL.to_vec(), Locale::Ja).unwrap();
    assert_eq!(config, LocaleConfig::default());
  }

  #[test]
  fn rejects_empty_locales() {
    let err = LocaleConfig::new(vec![], Locale::Ja).unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
  }

  #[test]
  fn rejects_default_outside_locales() {
    let err = LocaleConfig::new(vec![Locale::En, Locale::Zh], Locale::Ja).unwrap_err();
    assert!(err.to_string().contains("\"ja\" is not in locales"));
  }

  #[test]
  fn rejects_duplicate_locales() {
    let err = LocaleConfig::new(vec![Locale::En, Locale::En], Locale::En).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
  }

  #[test]
  fn rejects_relative_asset_prefix() {
    let err = LocaleConfig::builder(vec![Locale::En], Locale::En)
      .asset_prefixes(vec!["images/".into()])
      .build()
      .unwrap_err();
    assert!(err.to_string().contains("must start with '/'"));
  }

  #[test]
  fn geo_headers_are_lowercased() {
    let config = LocaleConfig::builder(vec![Locale::En], Locale::En)
      .geo_headers(vec!["X-Country ".into()])
      .build()
      .unwrap();
    assert_eq!(config.geo_headers(), &["x-country"]);
  }

  #[test]
  fn supports_only_configured() {
    let config = LocaleConfig::new(vec![Locale::En, Locale::Ja], Locale::Ja).unwrap();
    assert!(config.supports(Locale::Ja));
    assert!(!config.supports(Locale::Zh));
  }
}
