/* src/server/core/rust/src/page.rs */

use crate::locale::Locale;

/// A fully rendered page for one locale, served at `/{locale}` and `/{locale}/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDef {
  pub locale: Locale,
  pub html: String,
}
