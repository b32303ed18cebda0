/* src/server/core/rust/src/resolver.rs */

use crate::config::LocaleConfig;
use crate::locale::Locale;
use crate::path::{in_matcher_scope, is_asset_path, path_locale, prefixed_target};
use crate::resolve::{RequestContext, ResolveData, ResolveStrategy, default_strategies, resolve_chain};

/// Outcome of locale resolution for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  PassThrough,
  RedirectTo(String),
}

/// Per-request locale decision: pass through or redirect to `/{locale}{path}`.
///
/// Holds only immutable configuration and the strategy chain, so a single
/// instance is shared by every request.
pub struct LocaleResolver {
  config: LocaleConfig,
  strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl LocaleResolver {
  pub fn new(config: LocaleConfig) -> Self {
    Self::with_strategies(config, default_strategies())
  }

  pub fn with_strategies(config: LocaleConfig, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    Self { config, strategies }
  }

  pub fn config(&self) -> &LocaleConfig {
    &self.config
  }

  pub fn strategy_kinds(&self) -> Vec<&str> {
    self.strategies.iter().map(|s| s.kind()).collect()
  }

  /// Whether the middleware runs for this path at all.
  pub fn in_scope(&self, path: &str) -> bool {
    in_matcher_scope(path, self.config.matcher_excludes())
  }

  /// Locale the request would be sent to, ignoring its path.
  pub fn pick_locale(&self, request: &RequestContext) -> Locale {
    self.pick_locale_with_source(request).0
  }

  fn pick_locale_with_source(&self, request: &RequestContext) -> (Locale, &str) {
    let data = ResolveData {
      request,
      locales: self.config.locales(),
      geo_headers: self.config.geo_headers(),
      default_locale: self.config.default_locale(),
    };
    resolve_chain(&self.strategies, &data)
  }

  pub fn resolve(&self, request: &RequestContext) -> Action {
    let path = request.path;

    if is_asset_path(path, self.config.asset_prefixes()) {
      return Action::PassThrough;
    }
    if path_locale(path, self.config.locales()).is_some() {
      return Action::PassThrough;
    }

    let (locale, source) = self.pick_locale_with_source(request);
    let target = prefixed_target(locale, path, request.query);
    tracing::debug!(path, %locale, source, target = %target, "redirecting to locale prefix");
    Action::RedirectTo(target)
  }
}

impl Default for LocaleResolver {
  fn default() -> Self {
    Self::new(LocaleConfig::default())
  }
}
