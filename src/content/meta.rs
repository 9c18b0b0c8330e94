//! Post metadata from YAML (`---`) or TOML (`+++`) frontmatter.

use serde::{Deserialize, Serialize};

/// Post author with an optional profile slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Author {
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Post metadata from markdown frontmatter
///
/// # Standard Fields
///
/// | Field         | Type           | Description                         |
/// |---------------|----------------|-------------------------------------|
/// | `title`       | `String`       | Post title                          |
/// | `description` | `String`       | Brief description                   |
/// | `date`        | `String`       | Publication date                    |
/// | `author`      | `Author`       | Author name and profile slug        |
/// | `slug`        | `String`       | URL slug (overrides file stem)      |
/// | `draft`       | `bool`         | Draft status (default: false)       |
/// | `tags`        | `Vec<String>`  | Categorization tags                 |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub author: Author,
    /// Custom URL slug (overrides the slugified file stem).
    pub slug: Option<String>,
    pub draft: bool,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_meta_default() {
        let meta = PostMeta::default();
        assert!(meta.title.is_none());
        assert!(!meta.draft);
        assert!(meta.tags.is_empty());
        assert!(meta.author.name.is_none());
    }

    #[test]
    fn test_post_meta_toml_deserialize() {
        let toml = "title = \"Hello\"\ndraft = true\ntags = [\"rust\", \"web\"]\n\
                    [author]\nname = \"Alice\"\nslug = \"alice\"\n";
        let meta: PostMeta = toml::from_str(toml).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert!(meta.draft);
        assert_eq!(meta.tags, vec!["rust", "web"]);
        assert_eq!(meta.author.name.as_deref(), Some("Alice"));
        assert_eq!(meta.author.slug.as_deref(), Some("alice"));
    }
}
