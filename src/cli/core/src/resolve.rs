/* src/cli/core/src/resolve.rs */

use anyhow::{Result, bail};
use sweetspot_server::{Action, LocaleConfig, LocaleResolver, RequestContext};

/// Split `name=value` (or `name: value`) into a lowercase header name and value.
/// The first `:` or `=` is the separator, so values may contain either.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
  let Some(at) = raw.find([':', '=']) else {
    bail!("invalid header \"{raw}\", expected name=value");
  };
  let (name, value) = (&raw[..at], &raw[at + 1..]);
  let name = name.trim();
  if name.is_empty() {
    bail!("invalid header \"{raw}\", empty name");
  }
  Ok((name.to_ascii_lowercase(), value.trim().to_string()))
}

/// Describe what the locale middleware would do for `url` (path plus optional query).
pub fn describe(config: LocaleConfig, url: &str, headers: &[(String, String)]) -> String {
  let resolver = LocaleResolver::new(config);
  let (path, query) = match url.split_once('?') {
    Some((p, q)) => (p, Some(q)),
    None => (url, None),
  };

  if !resolver.in_scope(path) {
    return "pass-through (outside middleware scope)".to_string();
  }

  let ctx = RequestContext {
    path,
    query,
    headers: headers.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect(),
  };
  match resolver.resolve(&ctx) {
    Action::PassThrough => "pass-through".to_string(),
    Action::RedirectTo(target) => format!("redirect 307 -> {target}"),
  }
}
