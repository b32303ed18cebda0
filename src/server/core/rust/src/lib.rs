/* src/server/core/rust/src/lib.rs */

pub mod config;
pub mod dictionary;
pub mod errors;
pub mod locale;
pub mod negotiate;
pub mod page;
pub mod path;
pub mod render;
pub mod resolve;
pub mod resolver;
pub mod server;

// Re-exports for ergonomic use
pub use config::LocaleConfig;
pub use dictionary::Dictionaries;
pub use errors::{Result, SiteError};
pub use locale::Locale;
pub use negotiate::{LanguageRange, negotiate, parse_accept_language};
pub use page::PageDef;
pub use render::{generate_static_params, render_page, render_site};
pub use resolve::{
  RequestContext, ResolveData, ResolveStrategy, default_strategies, from_accept_language,
  from_geo_header, resolve_chain,
};
pub use resolver::{Action, LocaleResolver};
pub use server::{SiteParts, SiteServer};
