/* src/server/core/rust/src/path.rs */

use crate::locale::Locale;

/// True if the path is a public file that must never be locale-prefixed.
pub fn is_asset_path(path: &str, prefixes: &[String]) -> bool {
  prefixes.iter().any(|p| path.starts_with(p.as_str()))
}

/// Locale carried by the first path segment, if any.
/// Matches whole segments only: `/en` and `/en/about` do, `/english` does not.
pub fn path_locale(path: &str, locales: &[Locale]) -> Option<Locale> {
  let rest = path.strip_prefix('/')?;
  let segment = rest.split('/').next().unwrap_or("");
  locales.iter().copied().find(|l| l.as_str() == segment)
}

/// Whether the locale middleware should run at all for this path.
/// Excluded heads match on the characters right after the leading `/`,
/// so `api` covers both `/api/...` and `/apiary`.
pub fn in_matcher_scope(path: &str, excludes: &[String]) -> bool {
  let rest = path.strip_prefix('/').unwrap_or(path);
  !excludes.iter().any(|e| rest.starts_with(e.as_str()))
}

/// Build `/{locale}{path}{?query}`. An empty query (`/x?`) is dropped.
pub fn prefixed_target(locale: Locale, path: &str, query: Option<&str>) -> String {
  let mut target = String::with_capacity(path.len() + 4);
  target.push('/');
  target.push_str(locale.as_str());
  if !path.starts_with('/') {
    target.push('/');
  }
  target.push_str(path);
  if let Some(q) = query.filter(|q| !q.is_empty()) {
    target.push('?');
    target.push_str(q);
  }
  target
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{DEFAULT_ASSET_PREFIXES, DEFAULT_MATCHER_EXCLUDES};

  fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
  }

  #[test]
  fn asset_prefixes() {
    let prefixes = strings(DEFAULT_ASSET_PREFIXES);
    assert!(is_asset_path("/images/hero.png", &prefixes));
    assert!(is_asset_path("/logo.png", &prefixes));
    assert!(is_asset_path("/next.svg", &prefixes));
    assert!(is_asset_path("/vercel.svg", &prefixes));
    assert!(!is_asset_path("/images", &prefixes));
    assert!(!is_asset_path("/about", &prefixes));
  }

  #[test]
  fn path_locale_exact_segment() {
    let all = Locale::ALL;
    assert_eq!(path_locale("/en", &all), Some(Locale::En));
    assert_eq!(path_locale("/ja/", &all), Some(Locale::Ja));
    assert_eq!(path_locale("/zh/about/team", &all), Some(Locale::Zh));
    assert_eq!(path_locale("/english", &all), None);
    assert_eq!(path_locale("/jan/", &all), None);
    assert_eq!(path_locale("/", &all), None);
    assert_eq!(path_locale("", &all), None);
  }

  #[test]
  fn path_locale_only_configured() {
    assert_eq!(path_locale("/zh/", &[Locale::En, Locale::Ja]), None);
  }

  #[test]
  fn matcher_scope() {
    let excludes = strings(DEFAULT_MATCHER_EXCLUDES);
    assert!(in_matcher_scope("/", &excludes));
    assert!(in_matcher_scope("/about", &excludes));
    assert!(!in_matcher_scope("/_next/static/chunk.js", &excludes));
    assert!(!in_matcher_scope("/api/contact", &excludes));
    assert!(!in_matcher_scope("/favicon.ico", &excludes));
  }

  #[test]
  fn target_keeps_query() {
    assert_eq!(prefixed_target(Locale::En, "/contact", Some("x=1")), "/en/contact?x=1");
    assert_eq!(prefixed_target(Locale::Ja, "/", None), "/ja/");
    assert_eq!(prefixed_target(Locale::Zh, "/about", Some("")), "/zh/about");
  }

  #[test]
  fn target_without_leading_slash() {
    assert_eq!(prefixed_target(Locale::Ja, "about", None), "/ja/about");
  }
}
