//! Frontmatter extraction from markdown sources.
//!
//! Supports YAML (`---`) and TOML (`+++`) fences. The YAML path is a
//! deliberately small line-based parser covering the fields posts actually
//! use, including the nested `author:` block.

use anyhow::Result;

use super::meta::PostMeta;

/// Metadata extractor for markdown frontmatter.
pub struct MetaExtractor;

impl MetaExtractor {
    /// Extract frontmatter and return (metadata, body).
    pub fn extract_frontmatter<'a>(&self, content: &'a str) -> Result<Option<(PostMeta, &'a str)>> {
        match Self::detect_frontmatter(content) {
            Some((fm, body, is_toml)) => {
                let meta = if is_toml {
                    Self::parse_toml(fm)?
                } else {
                    Self::parse_yaml_like(fm)
                };
                Ok(Some((meta, body)))
            }
            None => Ok(None),
        }
    }

    /// Parse simple YAML-like frontmatter (key: value).
    ///
    /// Indented keys under `author:` populate the nested author fields.
    fn parse_yaml_like(content: &str) -> PostMeta {
        let mut meta = PostMeta::default();
        let mut in_author = false;

        for line in content.lines() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let indented = line.starts_with(' ') || line.starts_with('\t');
            let Some((key, value)) = line.trim().split_once(':') else {
                continue;
            };
            let key_lower = key.trim().to_lowercase();
            let value = value.trim().trim_matches('"');

            if in_author && indented {
                match key_lower.as_str() {
                    "name" => meta.author.name = Some(value.to_string()),
                    "slug" => meta.author.slug = Some(value.to_string()),
                    _ => {}
                }
                continue;
            }
            in_author = false;

            match key_lower.as_str() {
                "title" => meta.title = Some(value.to_string()),
                "description" => meta.description = Some(value.to_string()),
                "date" => meta.date = Some(value.to_string()),
                "slug" => meta.slug = Some(value.to_string()),
                "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                "tags" => {
                    meta.tags = value
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                }
                "author" => {
                    if value.is_empty() {
                        in_author = true;
                    } else {
                        meta.author.name = Some(value.to_string());
                    }
                }
                _ => {}
            }
        }

        meta
    }

    /// Parse TOML frontmatter.
    fn parse_toml(content: &str) -> Result<PostMeta> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Invalid TOML frontmatter: {}", e))
    }

    /// Detect and extract frontmatter.
    /// Returns `(frontmatter, body, is_toml)` if found.
    fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
        let trimmed = content.trim_start();

        // YAML: ---...---
        if trimmed.starts_with("---")
            && let Some(end) = trimmed[3..].find("\n---")
        {
            let fm = trimmed[3..3 + end].trim();
            let body = trimmed[3 + end + 4..].trim_start_matches('\n');
            return Some((fm, body, false));
        }

        // TOML: +++...+++
        if trimmed.starts_with("+++")
            && let Some(end) = trimmed[3..].find("\n+++")
        {
            let fm = trimmed[3..3 + end].trim();
            let body = trimmed[3 + end + 4..].trim_start_matches('\n');
            return Some((fm, body, true));
        }

        None
    }
}
