/* src/server/core/rust/src/dictionary.rs */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{Result, SiteError};
use crate::locale::Locale;

/// Translation bundles keyed by locale, loaded from `{dir}/{locale}.json`.
#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
  bundles: HashMap<Locale, Value>,
}

impl Dictionaries {
  pub fn load(dir: &Path, locales: &[Locale]) -> Result<Self> {
    let mut bundles = HashMap::with_capacity(locales.len());
    for &locale in locales {
      bundles.insert(locale, load_dictionary(dir, locale)?);
    }
    tracing::info!(dir = %dir.display(), count = bundles.len(), "dictionaries loaded");
    Ok(Self { bundles })
  }

  pub fn from_values(bundles: impl IntoIterator<Item = (Locale, Value)>) -> Self {
    Self { bundles: bundles.into_iter().collect() }
  }

  pub fn get(&self, locale: Locale) -> Option<&Value> {
    self.bundles.get(&locale)
  }

  /// Look up a dotted key such as `hero.cta.book`; numeric segments index arrays
  /// (`industries.items.0.title`).
  pub fn lookup(&self, locale: Locale, key: &str) -> Option<&Value> {
    lookup_path(self.get(locale)?, key)
  }

  pub fn len(&self) -> usize {
    self.bundles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bundles.is_empty()
  }
}

pub fn dictionary_path(dir: &Path, locale: Locale) -> PathBuf {
  dir.join(format!("{locale}.json"))
}

pub fn load_dictionary(dir: &Path, locale: Locale) -> Result<Value> {
  let path = dictionary_path(dir, locale);
  if !path.is_file() {
    return Err(SiteError::DictionaryMissing(path));
  }
  let content =
    std::fs::read_to_string(&path).map_err(|source| SiteError::Io { path: path.clone(), source })?;
  serde_json::from_str(&content).map_err(|source| SiteError::DictionaryParse { path, source })
}

pub(crate) fn lookup_path<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
  let mut current = root;
  for segment in key.split('.') {
    current = match current {
      Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
      _ => current.get(segment)?,
    };
  }
  Some(current)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
  }

  #[test]
  fn load_all_locales() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "en.json", r#"{"hero":{"title":"Hello"}}"#);
    write(dir.path(), "ja.json", r#"{"hero":{"title":"こんにちは"}}"#);
    write(dir.path(), "zh.json", r#"{"hero":{"title":"你好"}}"#);

    let dicts = Dictionaries::load(dir.path(), &Locale::ALL).unwrap();
    assert_eq!(dicts.len(), 3);
    assert_eq!(dicts.lookup(Locale::Ja, "hero.title"), Some(&json!("こんにちは")));
    assert_eq!(dicts.lookup(Locale::Zh, "hero.title"), Some(&json!("你好")));
  }

  #[test]
  fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "en.json", "{}");
    let err = Dictionaries::load(dir.path(), &[Locale::En, Locale::Ja]).unwrap_err();
    assert!(matches!(err, SiteError::DictionaryMissing(p) if p.ends_with("ja.json")));
  }

  #[test]
  fn invalid_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "en.json", "{not json");
    let err = load_dictionary(dir.path(), Locale::En).unwrap_err();
    assert!(matches!(err, SiteError::DictionaryParse { .. }));
  }

  #[test]
  fn only_requested_locales_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "en.json", "{}");
    let dicts = Dictionaries::load(dir.path(), &[Locale::En]).unwrap();
    assert!(dicts.get(Locale::En).is_some());
    assert!(dicts.get(Locale::Zh).is_none());
  }

  #[test]
  fn lookup_missing_key() {
    let dicts = Dictionaries::from_values([(Locale::En, json!({"nav": {"home": "Home"}}))]);
    assert_eq!(dicts.lookup(Locale::En, "nav.home"), Some(&json!("Home")));
    assert_eq!(dicts.lookup(Locale::En, "nav.about"), None);
    assert_eq!(dicts.lookup(Locale::En, "nav.home.deeper"), None);
    assert_eq!(dicts.lookup(Locale::Ja, "nav.home"), None);
  }

  #[test]
  fn lookup_indexes_arrays() {
    let dicts = Dictionaries::from_values([(
      Locale::En,
      json!({"industries": {"items": [{"title": "Retail"}, {"title": "Logistics"}]}}),
    )]);
    assert_eq!(dicts.lookup(Locale::En, "industries.items.0.title"), Some(&json!("Retail")));
    assert_eq!(dicts.lookup(Locale::En, "industries.items.1.title"), Some(&json!("Logistics")));
    assert_eq!(dicts.lookup(Locale::En, "industries.items.2.title"), None);
    assert_eq!(dicts.lookup(Locale::En, "industries.items.first"), None);
  }
}
