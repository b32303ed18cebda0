/* src/server/core/rust/src/server.rs */

use std::path::PathBuf;

use crate::config::LocaleConfig;
use crate::page::PageDef;
use crate::resolve::ResolveStrategy;
use crate::resolver::LocaleResolver;

/// Framework-agnostic parts extracted from `SiteServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct SiteParts {
  pub resolver: LocaleResolver,
  pub pages: Vec<PageDef>,
  pub public_dir: Option<PathBuf>,
}

pub struct SiteServer {
  config: LocaleConfig,
  strategies: Vec<Box<dyn ResolveStrategy>>,
  pages: Vec<PageDef>,
  public_dir: Option<PathBuf>,
}

impl SiteServer {
  pub fn new(config: LocaleConfig) -> Self {
    Self { config, strategies: Vec::new(), pages: Vec::new(), public_dir: None }
  }

  pub fn page(mut self, page: PageDef) -> Self {
    self.pages.push(page);
    self
  }

  pub fn pages(mut self, pages: impl IntoIterator<Item = PageDef>) -> Self {
    self.pages.extend(pages);
    self
  }

  /// Directory served for paths that are not locale pages (images, logo, icons).
  pub fn public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.public_dir = Some(dir.into());
    self
  }

  pub fn resolve_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    self.strategies = strategies;
    self
  }

  /// Consume the builder. An empty strategy list means the default chain.
  pub fn into_parts(self) -> SiteParts {
    let resolver = if self.strategies.is_empty() {
      LocaleResolver::new(self.config)
    } else {
      LocaleResolver::with_strategies(self.config, self.strategies)
    };
    SiteParts { resolver, pages: self.pages, public_dir: self.public_dir }
  }
}

impl Default for SiteServer {
  fn default() -> Self {
    Self::new(LocaleConfig::default())
  }
}
