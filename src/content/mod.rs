//! Markdown content store.
//!
//! Posts for locale L live under `<content>/<articles>/<L>/*.md`. This
//! module is the content-query side of route enumeration: it scans a
//! locale's article directory and returns its published posts.
//!
//! Fetch failures (missing directory, unreadable file, malformed
//! frontmatter, duplicate slugs) are not handled here or by callers
//! mid-enumeration: they propagate and abort the whole run.

mod frontmatter;
mod meta;
mod scan;
mod slug;

pub use frontmatter::MetaExtractor;
pub use meta::{Author, PostMeta};
pub use scan::scan_locale;
pub use slug::slugify;

use std::path::PathBuf;
use thiserror::Error;

use crate::config::SiteConfig;

/// Content fetch errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content directory not found: `{0}`")]
    MissingDir(PathBuf),

    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid frontmatter in `{path}`: {message}")]
    Frontmatter { path: PathBuf, message: String },

    #[error("duplicate slug `{slug}` in `{dir}`")]
    DuplicateSlug { slug: String, dir: PathBuf },
}

/// A published blog post.
#[derive(Debug, Clone)]
pub struct Post {
    /// Path-safe identifier, unique within a locale.
    pub slug: String,
    /// Frontmatter metadata (title may be backfilled from the body).
    pub meta: PostMeta,
    /// Source file path.
    pub path: PathBuf,
}

/// Content-query capability: fetch all published posts for a locale.
///
/// The filesystem store is the production implementation; tests inject
/// in-memory sources to drive the route enumerator.
pub trait ContentSource {
    /// Fetch posts for `locale`, in store order.
    fn fetch(&self, locale: &str) -> Result<Vec<Post>, ContentError>;
}

/// Filesystem-backed content source rooted at the configured content dir.
pub struct FsContent<'a> {
    config: &'a SiteConfig,
}

impl<'a> FsContent<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }
}

impl ContentSource for FsContent<'_> {
    fn fetch(&self, locale: &str) -> Result<Vec<Post>, ContentError> {
        scan_locale(&self.config.locale_dir(locale))
    }
}
