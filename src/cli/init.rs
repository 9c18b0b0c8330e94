//! Project initialization.
//!
//! Creates the default configuration file and per-locale article
//! directories.

use anyhow::{Result, bail};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::log;

/// Default configuration template written by `keiro init`.
const CONFIG_TEMPLATE: &str = r#"[site]
title = "My Blog"
description = "A bilingual tech blog"
url = "https://blog.example.jp"

[content]
dir = "content"
articles = "articles"

[[i18n.locales]]
code = "ja"
name = "日本語"
default = true

[[i18n.locales]]
code = "en"
name = "English"

[sitemap]
enable = true
path = "sitemap.xml"
gzip = true
"#;

/// Sample post placed in the default locale's directory.
const SAMPLE_POST: &str = r#"---
title: Hello
description: First post
date: 2024-01-01
---

# Hello

Welcome to your new blog.
"#;

/// Create a new project with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Write configuration file
/// 3. Create per-locale article directories
pub fn new_project(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    validate_target(root)?;

    fs::create_dir_all(root)?;
    fs::write(root.join("keiro.toml"), CONFIG_TEMPLATE)?;

    for locale in &config.i18n.locales {
        let dir = config.locale_dir(&locale.code);
        fs::create_dir_all(&dir)?;

        if config.i18n.is_default(&locale.code) {
            fs::write(dir.join("hello.md"), SAMPLE_POST)?;
        }
    }

    write_ignore_file(root, &config.root_relative(&config.output))?;

    log!("init"; "Project initialized successfully");
    Ok(())
}

/// Refuse to overwrite an existing project.
fn validate_target(root: &Path) -> Result<()> {
    if root.join("keiro.toml").exists() {
        bail!("`{}` already contains a keiro.toml", root.display());
    }
    Ok(())
}

/// Write .gitignore with the output directory, appending if one exists.
fn write_ignore_file(root: &Path, output_dir: &Path) -> Result<()> {
    let ignore_path = root.join(".gitignore");
    let entry = format!("{}/\n", output_dir.display());

    if ignore_path.exists() {
        let existing = fs::read_to_string(&ignore_path)?;
        if !existing.lines().any(|l| l.trim() == entry.trim()) {
            fs::write(&ignore_path, format!("{existing}{entry}"))?;
        }
    } else {
        fs::write(&ignore_path, entry)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.content.dir = root.join("content");
        config.output = root.join("dist");
        config
    }

    #[test]
    fn test_new_project_creates_structure() {
        let dir = TempDir::new().unwrap();
        let config = init_config(dir.path());

        new_project(&config).unwrap();

        assert!(dir.path().join("keiro.toml").exists());
        assert!(dir.path().join("content/articles/ja/hello.md").exists());
        assert!(dir.path().join("content/articles/en").is_dir());
        assert!(dir.path().join(".gitignore").exists());
    }

    #[test]
    fn test_template_parses() {
        let config: Result<SiteConfig, _> = toml::from_str(CONFIG_TEMPLATE);
        let config = config.unwrap();
        assert_eq!(config.i18n.default_locale().code, "ja");
        assert!(config.sitemap.gzip);
    }

    #[test]
    fn test_refuses_existing_project() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("keiro.toml"), "[site]\n").unwrap();

        let config = init_config(dir.path());
        assert!(new_project(&config).is_err());
    }

    #[test]
    fn test_gitignore_appended_once() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "target/\n").unwrap();

        write_ignore_file(dir.path(), Path::new("dist")).unwrap();
        write_ignore_file(dir.path(), Path::new("dist")).unwrap();

        let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(content.matches("dist/").count(), 1);
        assert!(content.contains("target/"));
    }
}
