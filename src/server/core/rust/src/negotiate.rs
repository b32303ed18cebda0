/* src/server/core/rust/src/negotiate.rs */

//! `Accept-Language` parsing and matching against the supported locales.

use unic_langid::LanguageIdentifier;

use crate::errors::{Result, SiteError};
use crate::locale::Locale;

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange<'a> {
  pub tag: &'a str,
  pub quality: f64,
}

/// Parse an `Accept-Language` header into ranges ordered by preference.
///
/// Entries with `q=0` (explicitly refused) or an unparsable weight are dropped.
/// Ties keep header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange<'_>> {
  let mut ranges = Vec::new();

  for part in header.split(',') {
    let mut segments = part.split(';');
    let tag = segments.next().unwrap_or("").trim();
    if tag.is_empty() || tag.contains(char::is_whitespace) {
      continue;
    }

    let mut quality = Some(1.0_f64);
    for param in segments {
      if let Some((key, value)) = param.split_once('=')
        && key.trim() == "q"
      {
        quality = value.trim().parse::<f64>().ok();
      }
    }

    match quality {
      Some(q) if q > 0.0 => ranges.push(LanguageRange { tag, quality: q }),
      _ => {}
    }
  }

  // stable: equal weights stay in header order
  ranges.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(std::cmp::Ordering::Equal));
  ranges
}

/// Pick the best supported locale for an `Accept-Language` header.
///
/// Every range must be a well-formed language identifier; a single malformed
/// tag (including the `*` wildcard) fails the whole negotiation. Ranges are
/// tried in preference order and match on their language subtag, so
/// `zh-Hant-TW` selects `zh` and `en-US` selects `en`.
pub fn negotiate(header: &str, supported: &[Locale]) -> Result<Option<Locale>> {
  let ranges = parse_accept_language(header);

  let mut requested = Vec::with_capacity(ranges.len());
  for range in &ranges {
    // BCP 47 separates subtags with `-` only; the parser also takes `_`.
    if range.tag.contains('_') {
      return Err(SiteError::InvalidLanguageTag(range.tag.to_string()));
    }
    let langid: LanguageIdentifier =
      range.tag.parse().map_err(|_| SiteError::InvalidLanguageTag(range.tag.to_string()))?;
    requested.push(langid);
  }

  for langid in &requested {
    if let Ok(locale) = langid.language.as_str().parse::<Locale>()
      && supported.contains(&locale)
    {
      return Ok(Some(locale));
    }
  }

  Ok(None)
}
