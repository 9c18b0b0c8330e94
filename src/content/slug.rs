//! Slug generation from file stems.

use deunicode::deunicode;

/// Build a path-safe slug from a file stem.
///
/// Transliterates Unicode to ASCII, lowercases, converts whitespace and
/// underscores to dashes, drops everything else, and collapses runs of
/// dashes.
///
/// # Examples
///
/// - `"Hello World"` -> `"hello-world"`
/// - `"日本語の記事"` -> `"ri-ben-yu-noji-shi"`
/// - `"we_love__rust!"` -> `"we-love-rust"`
pub fn slugify(stem: &str) -> String {
    let ascii = deunicode(stem);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = true; // suppress leading dash

    for c in ascii.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_dash = false;
        } else if (c.is_ascii_whitespace() || c == '-' || c == '_') && !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
