//! Sitemap generation configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for sitemap file.
    pub path: PathBuf,
    /// Also write a gzip-compressed `<path>.gz` artifact.
    pub gzip: bool,
    /// Strip indentation and empty lines from the XML output.
    pub minify: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
            gzip: false,
            minify: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.sitemap.enable);
        assert_eq!(config.sitemap.path, PathBuf::from("sitemap.xml"));
        assert!(!config.sitemap.gzip);
        assert!(!config.sitemap.minify);
    }

    #[test]
    fn test_gzip_option() {
        let config = test_parse_config("[sitemap]\ngzip = true\n");
        assert!(config.sitemap.gzip);
    }
}
