/* src/cli/core/src/build.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use sweetspot_server::{Dictionaries, PageDef, render_site};

use crate::config::SiteConfig;
use crate::ui;

/// Load dictionaries and the template, then render one page per configured locale.
pub fn render_pages(config: &SiteConfig, base_dir: &Path) -> Result<Vec<PageDef>> {
  let locale_config = config.locale_config()?;

  let template_path = config.template_path(base_dir);
  let template = std::fs::read_to_string(&template_path)
    .with_context(|| format!("failed to read template {}", template_path.display()))?;

  let messages_dir = config.messages_dir(base_dir);
  let dictionaries = Dictionaries::load(&messages_dir, locale_config.locales())
    .with_context(|| format!("failed to load dictionaries from {}", messages_dir.display()))?;

  let pages = render_site(&template, &dictionaries, &locale_config);
  if pages.len() != locale_config.locales().len() {
    bail!("rendered {} of {} locale pages", pages.len(), locale_config.locales().len());
  }
  Ok(pages)
}

/// Write `{out_dir}/{locale}/index.html` for every page. Returns the written paths.
pub fn write_pages(pages: &[PageDef], out_dir: &Path) -> Result<Vec<PathBuf>> {
  let mut written = Vec::with_capacity(pages.len());
  for page in pages {
    let dir = out_dir.join(page.locale.as_str());
    std::fs::create_dir_all(&dir)
      .with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join("index.html");
    std::fs::write(&path, &page.html)
      .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "page written");
    written.push(path);
  }
  Ok(written)
}

pub fn run_build(config: &SiteConfig, base_dir: &Path) -> Result<()> {
  ui::banner("build");

  ui::step(1, 2, "Rendering locale pages");
  let pages = render_pages(config, base_dir)?;
  for page in &pages {
    ui::detail_ok(&format!("{} ({})", page.locale, ui::format_size(page.html.len() as u64)));
  }

  ui::step(2, 2, "Writing output");
  let out_dir = config.out_dir(base_dir);
  let written = write_pages(&pages, &out_dir)?;
  for path in &written {
    ui::arrow(&path.display().to_string());
  }

  ui::blank();
  ui::ok(&format!("{} pages built into {}", written.len(), out_dir.display()));
  tracing::info!(pages = written.len(), out_dir = %out_dir.display(), "build finished");
  Ok(())
}
