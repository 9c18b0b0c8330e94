//! Configuration section definitions.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Tech Blog"
//! description = "Notes from the trenches"
//! url = "https://blog.example.jp"
//!
//! [content]
//! dir = "content"
//! articles = "articles"
//!
//! [[i18n.locales]]
//! code = "ja"
//! name = "日本語"
//! default = true
//!
//! [[i18n.locales]]
//! code = "en"
//! name = "English"
//!
//! [sitemap]
//! enable = true
//! path = "sitemap.xml"
//! gzip = true
//! ```

mod content;
mod i18n;
mod site;
mod sitemap;

pub use content::ContentConfig;
pub use i18n::{I18nConfig, LocaleConfig};
pub use site::SiteConfigSection;
pub use sitemap::SitemapConfig;
