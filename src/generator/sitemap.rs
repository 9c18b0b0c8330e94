//! Sitemap generation.
//!
//! Combines each enumerated route with the configured site URL and writes
//! a sitemap.xml file for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://blog.example.jp/blog/hello</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, generator::minify_xml, log, route::RouteEntry};
use anyhow::{Context, Result};
use flate2::{Compression, write::GzEncoder};
use std::borrow::Cow;
use std::fs;
use std::io::Write;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build and write the sitemap if enabled.
pub fn build_sitemap(entries: &[RouteEntry], config: &SiteConfig) -> Result<()> {
    if config.sitemap.enable {
        let sitemap = Sitemap::build(entries, config);
        sitemap.write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    fn build(entries: &[RouteEntry], config: &SiteConfig) -> Self {
        let base_url = config
            .site
            .url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/');

        let urls: Vec<UrlEntry> = entries
            .iter()
            .map(|entry| UrlEntry {
                loc: format!("{base_url}/{}", entry.path),
                lastmod: entry.lastmod.clone(),
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&escape_xml(&lastmod));
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.sitemap_path();
        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), config.sitemap.minify);

        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;
        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());

        if config.sitemap.gzip {
            let gz_path = gzip_path(&sitemap_path);
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&xml)?;
            let compressed = encoder.finish()?;

            fs::write(&gz_path, compressed)
                .with_context(|| format!("Failed to write sitemap to {}", gz_path.display()))?;
            log!("sitemap"; "{}", gz_path.file_name().unwrap_or_default().to_string_lossy());
        }

        Ok(())
    }
}

/// Append `.gz` to a path, preserving the original extension.
fn gzip_path(path: &std::path::Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".gz");
    name.into()
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn test_config(dir: &std::path::Path, gzip: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = Some("https://blog.example.jp".into());
        config.output = dir.to_path_buf();
        config.sitemap.gzip = gzip;
        config
    }

    fn entry(path: &str) -> RouteEntry {
        RouteEntry {
            path: path.to_string(),
            lastmod: None,
        }
    }

    fn dated_entry(path: &str, date: &str) -> RouteEntry {
        RouteEntry {
            path: path.to_string(),
            lastmod: Some(date.to_string()),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let sitemap = Sitemap { urls: vec![] };
        let xml = sitemap.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_absolutizes_routes() {
        let config = test_config(std::path::Path::new("/tmp"), false);
        let entries = vec![entry("blog/hello"), entry("en/blog/world")];
        let sitemap = Sitemap::build(&entries, &config);
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://blog.example.jp/blog/hello</loc>"));
        assert!(xml.contains("<loc>https://blog.example.jp/en/blog/world</loc>"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let mut config = test_config(std::path::Path::new("/tmp"), false);
        config.site.url = Some("https://blog.example.jp/".into());
        let entries = vec![entry("blog/hello")];
        let xml = Sitemap::build(&entries, &config).into_xml();

        assert!(xml.contains("<loc>https://blog.example.jp/blog/hello</loc>"));
    }

    #[test]
    fn test_sitemap_with_lastmod() {
        let config = test_config(std::path::Path::new("/tmp"), false);
        let entries = vec![dated_entry("blog/hello", "2024-05-01")];
        let xml = Sitemap::build(&entries, &config).into_xml();

        assert!(xml.contains("<loc>https://blog.example.jp/blog/hello</loc>"));
        assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
    }

    #[test]
    fn test_sitemap_without_lastmod() {
        let config = test_config(std::path::Path::new("/tmp"), false);
        let entries = vec![entry("blog/hello")];
        let xml = Sitemap::build(&entries, &config).into_xml();

        assert!(xml.contains("<loc>https://blog.example.jp/blog/hello</loc>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/search?q=a&b=c".to_string(),
                lastmod: None,
            }],
        };
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/blog/a".to_string(),
                lastmod: Some("2024-01-01".to_string()),
            }],
        };
        let xml = sitemap.into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert!(lines.last().unwrap().trim() == "</urlset>");
    }

    #[test]
    fn test_write_sitemap_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config(dir.path(), false);
        let entries = vec![entry("blog/hello")];

        build_sitemap(&entries, &config).unwrap();

        let written = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(written.contains("https://blog.example.jp/blog/hello"));
        assert!(!dir.path().join("sitemap.xml.gz").exists());
    }

    #[test]
    fn test_write_gzip_artifact() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config(dir.path(), true);
        let entries = vec![entry("blog/hello")];

        build_sitemap(&entries, &config).unwrap();

        let gz = std::fs::File::open(dir.path().join("sitemap.xml.gz")).unwrap();
        let mut decoded = String::new();
        flate2::read::GzDecoder::new(gz)
            .read_to_string(&mut decoded)
            .unwrap();

        let plain = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert_eq!(decoded, plain);
    }

    #[test]
    fn test_disabled_sitemap_is_noop() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = test_config(dir.path(), false);
        config.sitemap.enable = false;

        build_sitemap(&[entry("blog/a")], &config).unwrap();

        assert!(!dir.path().join("sitemap.xml").exists());
    }

    #[test]
    fn test_gzip_path() {
        assert_eq!(
            gzip_path(std::path::Path::new("dist/sitemap.xml")),
            std::path::PathBuf::from("dist/sitemap.xml.gz")
        );
    }
}
