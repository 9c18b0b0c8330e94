//! Generate command implementation.
//!
//! Enumerates all blog routes and writes the sitemap artifact(s).

use anyhow::Result;

use crate::config::SiteConfig;
use crate::content::FsContent;
use crate::generator::sitemap::build_sitemap;
use crate::log;
use crate::route::enumerate_entries;
use crate::utils::plural_count;

/// Execute generate command
pub fn run_generate(config: &SiteConfig) -> Result<()> {
    let source = FsContent::new(config);
    let entries = enumerate_entries(&config.i18n, &source)?;

    log!("routes"; "enumerated {}", plural_count(entries.len(), "route"));

    build_sitemap(&entries, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_post(root: &Path, locale: &str, name: &str, content: &str) {
        let dir = root.join("content/articles").join(locale);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    fn test_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.content.dir = root.join("content");
        config.output = root.join("dist");
        config.site.url = Some("https://blog.example.jp".into());
        config
    }

    #[test]
    fn test_generate_end_to_end() {
        let dir = TempDir::new().unwrap();
        write_post(
            dir.path(),
            "ja",
            "hello.md",
            "---\ntitle: こんにちは\ndate: 2024-05-01\n---\n",
        );
        write_post(dir.path(), "en", "hello.md", "---\ntitle: Hello\n---\n");
        write_post(dir.path(), "en", "world.md", "---\ntitle: World\n---\n");

        let config = test_config(dir.path());
        run_generate(&config).unwrap();

        let xml = fs::read_to_string(dir.path().join("dist/sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://blog.example.jp/blog/hello</loc>"));
        assert!(xml.contains("<loc>https://blog.example.jp/en/blog/hello</loc>"));
        assert!(xml.contains("<loc>https://blog.example.jp/en/blog/world</loc>"));
        assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_generate_fails_without_locale_dir() {
        let dir = TempDir::new().unwrap();
        // Only ja exists; the en fetch must abort the run
        write_post(dir.path(), "ja", "hello.md", "body");

        let config = test_config(dir.path());
        let result = run_generate(&config);

        assert!(result.is_err());
        assert!(!dir.path().join("dist/sitemap.xml").exists());
    }

    #[test]
    fn test_generate_empty_locales_writes_empty_sitemap() {
        let dir = TempDir::new().unwrap();
        for locale in ["ja", "en"] {
            fs::create_dir_all(dir.path().join("content/articles").join(locale)).unwrap();
        }

        let config = test_config(dir.path());
        run_generate(&config).unwrap();

        let xml = fs::read_to_string(dir.path().join("dist/sitemap.xml")).unwrap();
        assert!(!xml.contains("<url>"));
    }
}
