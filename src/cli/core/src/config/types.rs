/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use sweetspot_server::config::{DEFAULT_ASSET_PREFIXES, DEFAULT_GEO_HEADERS, DEFAULT_MATCHER_EXCLUDES};
use sweetspot_server::{Locale, LocaleConfig};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub project: ProjectConfig,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub routing: RoutingSection,
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub server: ServerSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  #[serde(default = "default_project_name")]
  pub name: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self { name: default_project_name() }
  }
}

fn default_project_name() -> String {
  "sweetspot".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default = "default_locales")]
  pub locales: Vec<Locale>,
  #[serde(default = "default_locale")]
  pub default: Locale,
  #[serde(default = "default_messages_dir")]
  pub messages_dir: String,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self { locales: default_locales(), default: default_locale(), messages_dir: default_messages_dir() }
  }
}

fn default_locales() -> Vec<Locale> {
  Locale::ALL.to_vec()
}

fn default_locale() -> Locale {
  sweetspot_server::config::DEFAULT_LOCALE
}

fn default_messages_dir() -> String {
  "dictionaries".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoutingSection {
  #[serde(default = "default_asset_prefixes")]
  pub asset_prefixes: Vec<String>,
  #[serde(default = "default_geo_headers")]
  pub geo_headers: Vec<String>,
  #[serde(default = "default_matcher_excludes")]
  pub matcher_excludes: Vec<String>,
}

impl Default for RoutingSection {
  fn default() -> Self {
    Self {
      asset_prefixes: default_asset_prefixes(),
      geo_headers: default_geo_headers(),
      matcher_excludes: default_matcher_excludes(),
    }
  }
}

fn default_asset_prefixes() -> Vec<String> {
  DEFAULT_ASSET_PREFIXES.iter().map(|s| (*s).to_string()).collect()
}

fn default_geo_headers() -> Vec<String> {
  DEFAULT_GEO_HEADERS.iter().map(|s| (*s).to_string()).collect()
}

fn default_matcher_excludes() -> Vec<String> {
  DEFAULT_MATCHER_EXCLUDES.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  #[serde(default = "default_template")]
  pub template: String,
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self { template: default_template(), out_dir: default_out_dir() }
  }
}

fn default_template() -> String {
  "templates/index.html".to_string()
}

fn default_out_dir() -> String {
  "out".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_public_dir")]
  pub public_dir: String,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port(), public_dir: default_public_dir() }
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_public_dir() -> String {
  "public".to_string()
}

impl SiteConfig {
  pub fn validate(&self) -> Result<()> {
    self.locale_config().map(|_| ())
  }

  /// Immutable routing configuration handed to the resolver.
  pub fn locale_config(&self) -> Result<LocaleConfig> {
    LocaleConfig::builder(self.i18n.locales.clone(), self.i18n.default)
      .asset_prefixes(self.routing.asset_prefixes.clone())
      .geo_headers(self.routing.geo_headers.clone())
      .matcher_excludes(self.routing.matcher_excludes.clone())
      .build()
      .context("invalid [i18n]/[routing] configuration")
  }

  pub fn messages_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.i18n.messages_dir)
  }

  pub fn template_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.build.template)
  }

  pub fn out_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.build.out_dir)
  }

  pub fn public_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.server.public_dir)
  }

  pub fn bind_addr(&self, port_override: Option<u16>) -> Result<String> {
    let port = port_override.unwrap_or(self.server.port);
    if self.server.host.trim().is_empty() {
      bail!("server.host must not be empty");
    }
    Ok(format!("{}:{port}", self.server.host))
  }
}
