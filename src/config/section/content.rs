//! `[content]` configuration.
//!
//! Posts for locale L live under `<dir>/<articles>/<L>/*.md`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Content directory layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content root directory (relative to project root).
    pub dir: PathBuf,
    /// Article subdirectory name under the content root.
    pub articles: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".into(),
            articles: "articles".into(),
        }
    }
}

impl ContentConfig {
    /// The article directory for a locale: `<dir>/<articles>/<code>`.
    pub fn locale_dir(&self, code: &str) -> PathBuf {
        self.dir.join(&self.articles).join(code)
    }

    /// Normalize `dir` to an absolute path under `root`.
    pub fn normalize(&mut self, root: &Path) {
        self.dir = crate::utils::path::normalize_path(&root.join(&self.dir));
    }
}
