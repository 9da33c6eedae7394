//! Filesystem path normalization.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// # Example
/// ```ignore
/// let abs = normalize_path(Path::new("./site"));
/// ```
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

/// Path of `path` relative to `base`, compared segment by segment.
///
/// Returns `None` when `path` is not inside `base`.
pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    let mut path_parts = path.components().filter(|c| *c != Component::CurDir);
    for base_part in base.components().filter(|c| *c != Component::CurDir) {
        if path_parts.next() != Some(base_part) {
            return None;
        }
    }
    Some(path_parts.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_relative_to_nested() {
        let rel = relative_to(Path::new("/site/blog/2024"), Path::new("/site"));
        assert_eq!(rel, Some(PathBuf::from("blog/2024")));
    }

    #[test]
    fn test_relative_to_same_dir_is_empty() {
        let rel = relative_to(Path::new("/site"), Path::new("/site/"));
        assert_eq!(rel, Some(PathBuf::new()));
    }

    #[test]
    fn test_relative_to_is_segment_aware() {
        // A plain string replace would turn this into "-old/x".
        assert_eq!(
            relative_to(Path::new("/site-old/x"), Path::new("/site")),
            None
        );
        // The base name appearing deeper in the tree is left alone.
        assert_eq!(
            relative_to(Path::new("/site/a/site/b"), Path::new("/site")),
            Some(PathBuf::from("a/site/b"))
        );
    }
}
