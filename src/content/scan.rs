//! Locale directory scanning.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use super::{ContentError, MetaExtractor, Post, PostMeta, slugify};

/// Scan a locale's article directory for published posts.
///
/// Returns posts sorted by source path so enumeration order is stable
/// across builds. Draft posts are excluded. An existing but empty
/// directory yields an empty list; a missing directory is an error.
pub fn scan_locale(dir: &Path) -> Result<Vec<Post>, ContentError> {
    if !dir.is_dir() {
        return Err(ContentError::MissingDir(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = jwalk::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();

    let mut posts = Vec::with_capacity(files.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(files.len());

    for path in files {
        let Some(post) = load_post(&path)? else {
            continue; // draft
        };

        if !seen.insert(post.slug.clone()) {
            return Err(ContentError::DuplicateSlug {
                slug: post.slug,
                dir: dir.to_path_buf(),
            });
        }
        posts.push(post);
    }

    Ok(posts)
}

/// Load a single post. Returns `None` for drafts.
fn load_post(path: &Path) -> Result<Option<Post>, ContentError> {
    let source = std::fs::read_to_string(path)
        .map_err(|err| ContentError::Io(path.to_path_buf(), err))?;

    let (mut meta, body) = match MetaExtractor.extract_frontmatter(&source) {
        Ok(Some((meta, body))) => (meta, body),
        Ok(None) => (PostMeta::default(), source.as_str()),
        Err(err) => {
            return Err(ContentError::Frontmatter {
                path: path.to_path_buf(),
                message: err.to_string(),
            });
        }
    };

    if meta.draft {
        return Ok(None);
    }

    let slug = match meta.slug.clone() {
        Some(slug) => slug,
        None => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            slugify(&stem)
        }
    };
    if slug.is_empty() {
        return Err(ContentError::Frontmatter {
            path: path.to_path_buf(),
            message: "cannot derive a slug from frontmatter or file name".into(),
        });
    }

    // Backfill title from the first heading, like the content layer of the
    // original site derives document metadata from the body.
    if meta.title.is_none() {
        meta.title = first_heading(body);
    }

    Ok(Some(Post {
        slug,
        meta,
        path: path.to_path_buf(),
    }))
}

/// Text of the first `#` heading in a markdown body.
fn first_heading(body: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_heading = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }

    None
}
