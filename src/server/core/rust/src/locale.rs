/* src/server/core/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SiteError;

/// The closed set of locales the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  En,
  Ja,
  Zh,
}

impl Locale {
  pub const ALL: [Locale; 3] = [Locale::En, Locale::Ja, Locale::Zh];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ja => "ja",
      Self::Zh => "zh",
    }
  }

  /// Map an ISO 3166 country code from an edge geo header to a locale.
  /// Only mainland China and Japan get their own language; everything else is English.
  pub fn from_country(country: &str) -> Self {
    match country {
      "CN" => Self::Zh,
      "JP" => Self::Ja,
      _ => Self::En,
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Locale {
  type Err = SiteError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "en" => Ok(Self::En),
      "ja" => Ok(Self::Ja),
      "zh" => Ok(Self::Zh),
      other => Err(SiteError::UnknownLocale(other.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn country_mapping() {
    assert_eq!(Locale::from_country("CN"), Locale::Zh);
    assert_eq!(Locale::from_country("JP"), Locale::Ja);
    assert_eq!(Locale::from_country("US"), Locale::En);
    assert_eq!(Locale::from_country("TW"), Locale::En);
    assert_eq!(Locale::from_country("XX"), Locale::En);
  }

  #[test]
  fn country_mapping_is_case_sensitive() {
    assert_eq!(Locale::from_country("cn"), Locale::En);
  }

  #[test]
  fn parse_known_codes() {
    for locale in Locale::ALL {
      assert_eq!(locale.as_str().parse::<Locale>().ok(), Some(locale));
    }
  }

  #[test]
  fn parse_unknown_code() {
    assert!(matches!("fr".parse::<Locale>(), Err(SiteError::UnknownLocale(c)) if c == "fr"));
    assert!("EN".parse::<Locale>().is_err());
  }

  #[test]
  fn serde_lowercase() {
    let json = serde_json::to_string(&Locale::Zh).unwrap();
    assert_eq!(json, "\"zh\"");
    let parsed: Locale = serde_json::from_str("\"ja\"").unwrap();
    assert_eq!(parsed, Locale::Ja);
  }
}
