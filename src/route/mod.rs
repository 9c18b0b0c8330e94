//! Blog route enumeration.
//!
//! Produces the flat list of public URL paths for all posts across the
//! configured locales. Routes for the default locale are unprefixed
//! (`blog/<slug>`); every other locale is prefixed with its code
//! (`en/blog/<slug>`). This prefix policy mirrors the live site's URL
//! scheme and must not change, or existing routes break.

use crate::config::I18nConfig;
use crate::content::{ContentError, ContentSource};
use crate::debug;

/// URL segment shared by every post route.
const BLOG_PREFIX: &str = "blog";

/// A single post route with its sitemap metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Relative URL path, e.g. `en/blog/hello`.
    pub path: String,
    /// Publication date from the post's frontmatter, if any.
    pub lastmod: Option<String>,
}

/// Enumerate route entries for all posts across all configured locales.
///
/// Locales are processed strictly sequentially: the default locale first,
/// then the remaining locales in declaration order, so default-locale
/// routes always precede prefixed ones. Within a locale, routes follow
/// the content source's fetch order.
///
/// A fetch failure for any locale aborts the whole enumeration; no
/// partial route list is returned.
pub fn enumerate_entries(
    i18n: &I18nConfig,
    source: &impl ContentSource,
) -> Result<Vec<RouteEntry>, ContentError> {
    let default_code = i18n.default_locale().code.clone();
    let mut entries = Vec::new();

    let ordered = std::iter::once(default_code.as_str()).chain(
        i18n.locales
            .iter()
            .map(|l| l.code.as_str())
            .filter(|code| *code != default_code),
    );

    for code in ordered {
        let posts = source.fetch(code)?;
        debug!("routes"; "locale {}: {} posts", code, posts.len());

        for post in posts {
            let path = if code == default_code {
                format!("{BLOG_PREFIX}/{}", post.slug)
            } else {
                format!("{code}/{BLOG_PREFIX}/{}", post.slug)
            };
            entries.push(RouteEntry {
                path,
                lastmod: post.meta.date,
            });
        }
    }

    Ok(entries)
}

/// Enumerate routes as plain path strings.
pub fn enumerate_routes(
    i18n: &I18nConfig,
    source: &impl ContentSource,
) -> Result<Vec<String>, ContentError> {
    Ok(enumerate_entries(i18n, source)?
        .into_iter()
        .map(|entry| entry.path)
        .collect())
}
