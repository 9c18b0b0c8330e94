//! `[site]` configuration.
//!
//! Basic site metadata. `url` is the hostname combined with each route
//! to form absolute sitemap entries.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site metadata used by sitemap generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfigSection {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Site URL (e.g., "https://blog.example.jp"). Required when sitemap
    /// generation is enabled.
    pub url: Option<String>,
}

impl SiteConfigSection {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `sitemap_required` (the command will write a sitemap), `url` must be set
    /// - `url` must be a valid absolute URL with scheme
    pub fn validate(&self, sitemap_required: bool, diag: &mut ConfigDiagnostics) {
        match &self.url {
            Some(url) => {
                if url::Url::parse(url).is_err() {
                    diag.error_with_hint(
                        "site.url",
                        format!("`{url}` is not a valid URL"),
                        "use an absolute URL with scheme, e.g. `https://blog.example.jp`",
                    );
                }
            }
            None => {
                if sitemap_required {
                    diag.error_with_hint(
                        "site.url",
                        "sitemap.enable is set but site.url is not configured",
                        "set `url` under `[site]` or pass --site-url",
                    );
                }
            }
        }
    }
}
