/* src/server/core/rust/src/render.rs */

//! Static per-locale page generation from one HTML template and the
//! translation dictionaries.
//!
//! Slots: `<!--t:hero.title-->` inserts the HTML-escaped value,
//! `<!--t:hero.body:html-->` inserts it verbatim.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::config::LocaleConfig;
use crate::dictionary::{Dictionaries, lookup_path};
use crate::locale::Locale;
use crate::page::PageDef;

fn slot_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"<!--t:([A-Za-z0-9_\-]+(?:\.[A-Za-z0-9_\-]+)*)(:html)?-->").unwrap())
}

fn html_open_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"(?i)<html\b([^>]*)>").unwrap())
}

/// Locales a static page is generated for.
pub fn generate_static_params(config: &LocaleConfig) -> Vec<Locale> {
  config.locales().to_vec()
}

/// Render one page for `locale`.
pub fn render_page(template: &str, locale: Locale, dictionary: &Value) -> String {
  let body = slot_re().replace_all(template, |caps: &Captures| {
    let key = &caps[1];
    let raw = caps.get(2).is_some();
    let value = match lookup_path(dictionary, key) {
      Some(v) => stringify(v),
      None if key == "lang" => locale.as_str().to_string(),
      None => {
        tracing::warn!(%locale, key, "missing dictionary key");
        String::new()
      }
    };
    if raw { value } else { escape_html(&value) }
  });

  set_html_lang(&body, locale)
}

/// Render every configured locale. Locales without a dictionary are skipped with a warning.
pub fn render_site(template: &str, dictionaries: &Dictionaries, config: &LocaleConfig) -> Vec<PageDef> {
  let mut pages = Vec::new();
  for locale in generate_static_params(config) {
    let Some(dictionary) = dictionaries.get(locale) else {
      tracing::warn!(%locale, "no dictionary for locale, page not generated");
      continue;
    };
    pages.push(PageDef { locale, html: render_page(template, locale, dictionary) });
  }
  pages
}

fn set_html_lang(html: &str, locale: Locale) -> String {
  let Some(caps) = html_open_re().captures(html) else {
    return html.to_string();
  };
  let attrs = caps.get(1).map_or("", |m| m.as_str());
  if attrs.to_ascii_lowercase().contains("lang=") {
    return html.to_string();
  }
  let whole = caps.get(0).map_or(0..0, |m| m.range());
  let mut out = String::with_capacity(html.len() + 12);
  out.push_str(&html[..whole.start]);
  out.push_str(&format!("<html lang=\"{locale}\"{attrs}>"));
  out.push_str(&html[whole.end..]);
  out
}

fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String(s) => s.clone(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    other => other.to_string(),
  }
}

pub(crate) fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}
