//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absolute_nonexistent() {
        let path = Path::new("/nonexistent/posts");
        assert_eq!(normalize_path(path), PathBuf::from("/nonexistent/posts"));
    }

    #[test]
    fn test_normalize_relative_nonexistent() {
        let normalized = normalize_path(Path::new("some/relative/path"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("some/relative/path"));
    }

    #[test]
    fn test_normalize_resolves_dots() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("a");
        std::fs::create_dir(&nested).unwrap();

        let dotted = nested.join("..").join("a");
        assert_eq!(normalize_path(&dotted), nested.canonicalize().unwrap());
    }
}
