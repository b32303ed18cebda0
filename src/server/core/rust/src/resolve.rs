/* src/server/core/rust/src/resolve.rs */

use crate::locale::Locale;
use crate::negotiate::negotiate;

/// Read-only view of an incoming request, independent of any HTTP framework.
/// Header names are expected in lowercase (as `http::HeaderMap` yields them).
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
  pub path: &'a str,
  pub query: Option<&'a str>,
  pub headers: Vec<(&'a str, &'a str)>,
}

impl<'a> RequestContext<'a> {
  pub fn new(path: &'a str, query: Option<&'a str>) -> Self {
    Self { path, query, headers: Vec::new() }
  }

  pub fn header(mut self, name: &'a str, value: &'a str) -> Self {
    self.headers.push((name, value));
    self
  }

  /// First value of a header, matched case-insensitively.
  pub fn get_header(&self, name: &str) -> Option<&'a str> {
    self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| *v)
  }
}

pub struct ResolveData<'a> {
  pub request: &'a RequestContext<'a>,
  pub locales: &'a [Locale],
  pub geo_headers: &'a [String],
  pub default_locale: Locale,
}

/// One step of the locale resolution chain. Returning `None` defers to the
/// next strategy; the chain ends at the default locale.
pub trait ResolveStrategy: Send + Sync {
  fn kind(&self) -> &str;
  fn resolve(&self, data: &ResolveData) -> Option<Locale>;
}

struct FromGeoHeader;

impl ResolveStrategy for FromGeoHeader {
  fn kind(&self) -> &str {
    "geo_header"
  }

  fn resolve(&self, data: &ResolveData) -> Option<Locale> {
    // an empty header value counts as absent and falls through to the next one
    let country = data
      .geo_headers
      .iter()
      .filter_map(|name| data.request.get_header(name))
      .map(str::trim)
      .find(|v| !v.is_empty())?;
    let locale = Locale::from_country(country);
    data.locales.contains(&locale).then_some(locale)
  }
}

struct FromAcceptLanguage;

impl ResolveStrategy for FromAcceptLanguage {
  fn kind(&self) -> &str {
    "accept_language"
  }

  fn resolve(&self, data: &ResolveData) -> Option<Locale> {
    let header = data.request.get_header("accept-language").unwrap_or("");
    match negotiate(header, data.locales) {
      Ok(locale) => locale,
      Err(e) => {
        tracing::debug!(error = %e, header, "ignoring malformed Accept-Language");
        None
      }
    }
  }
}

/// Country from the edge geo headers (`x-vercel-ip-country`, then `cf-ipcountry` by default).
pub fn from_geo_header() -> Box<dyn ResolveStrategy> {
  Box::new(FromGeoHeader)
}

/// Quality-weighted `Accept-Language` negotiation.
pub fn from_accept_language() -> Box<dyn ResolveStrategy> {
  Box::new(FromAcceptLanguage)
}

/// Default chain: geo header -> Accept-Language -> default locale
pub fn default_strategies() -> Vec<Box<dyn ResolveStrategy>> {
  vec![from_geo_header(), from_accept_language()]
}

/// Run strategies in order; the first `Some` wins, otherwise the default locale.
/// Returns the locale together with the kind of the strategy that produced it.
pub fn resolve_chain<'s>(
  strategies: &'s [Box<dyn ResolveStrategy>],
  data: &ResolveData,
) -> (Locale, &'s str) {
  for strategy in strategies {
    if let Some(locale) = strategy.resolve(data) {
      return (locale, strategy.kind());
    }
  }
  (data.default_locale, "default")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::LocaleConfig;

  fn run(strategies: &[Box<dyn ResolveStrategy>], req: &RequestContext) -> (Locale, String) {
    let config = LocaleConfig::default();
    let data = ResolveData {
      request: req,
      locales: config.locales(),
      geo_headers: config.geo_headers(),
      default_locale: config.default_locale(),
    };
    let (locale, kind) = resolve_chain(strategies, &data);
    (locale, kind.to_string())
  }

  fn resolve(req: &RequestContext) -> Locale {
    run(&default_strategies(), req).0
  }

  #[test]
  fn vercel_header_wins() {
    let req = RequestContext::new("/", None)
      .header("x-vercel-ip-country", "CN")
      .header("cf-ipcountry", "JP")
      .header("accept-language", "en");
    assert_eq!(resolve(&req), Locale::Zh);
  }

  #[test]
  fn cloudflare_header_fallback() {
    let req = RequestContext::new("/", None).header("cf-ipcountry", "JP");
    assert_eq!(resolve(&req), Locale::Ja);
  }

  #[test]
  fn empty_vercel_header_falls_to_cloudflare() {
    let req =
      RequestContext::new("/", None).header("x-vercel-ip-country", "").header("cf-ipcountry", "CN");
    assert_eq!(resolve(&req), Locale::Zh);
  }

  #[test]
  fn other_country_is_english() {
    let req =
      RequestContext::new("/", None).header("x-vercel-ip-country", "DE").header("accept-language", "ja");
    assert_eq!(resolve(&req), Locale::En);
  }

  #[test]
  fn geo_beats_accept_language() {
    let req =
      RequestContext::new("/", None).header("cf-ipcountry", "US").header("accept-language", "zh-CN");
    let (locale, kind) = run(&default_strategies(), &req);
    assert_eq!(locale, Locale::En);
    assert_eq!(kind, "geo_header");
  }

  #[test]
  fn accept_language_when_no_geo() {
    let req = RequestContext::new("/", None).header("accept-language", "zh-TW,en;q=0.5");
    let (locale, kind) = run(&default_strategies(), &req);
    assert_eq!(locale, Locale::Zh);
    assert_eq!(kind, "accept_language");
  }

  #[test]
  fn header_lookup_is_case_insensitive() {
    let req = RequestContext::new("/", None).header("Accept-Language", "en");
    assert_eq!(resolve(&req), Locale::En);
  }

  #[test]
  fn malformed_accept_language_falls_back_to_default() {
    let req = RequestContext::new("/", None).header("accept-language", "*");
    let (locale, kind) = run(&default_strategies(), &req);
    assert_eq!(locale, Locale::Ja);
    assert_eq!(kind, "default");
  }

  #[test]
  fn no_signal_is_default() {
    let req = RequestContext::new("/", None);
    assert_eq!(run(&default_strategies(), &req), (Locale::Ja, "default".to_string()));
  }

  #[test]
  fn empty_chain_is_default() {
    let req = RequestContext::new("/", None).header("cf-ipcountry", "CN");
    assert_eq!(run(&[], &req).0, Locale::Ja);
  }

  #[test]
  fn strategy_order_is_respected() {
    let req =
      RequestContext::new("/", None).header("cf-ipcountry", "CN").header("accept-language", "en");
    let reversed = vec![from_accept_language(), from_geo_header()];
    assert_eq!(run(&reversed, &req).0, Locale::En);
  }

  #[test]
  fn geo_locale_outside_config_defers() {
    let config = LocaleConfig::new(vec![Locale::En, Locale::Ja], Locale::Ja).unwrap();
    let req =
      RequestContext::new("/", None).header("cf-ipcountry", "CN").header("accept-language", "en");
    let data = ResolveData {
      request: &req,
      locales: config.locales(),
      geo_headers: config.geo_headers(),
      default_locale: config.default_locale(),
    };
    assert_eq!(resolve_chain(&default_strategies(), &data).0, Locale::En);
  }
}
