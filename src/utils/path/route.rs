//! Site-root-relative URL paths.
//!
//! `<loc>` values are forward-slash separated, never start with a
//! separator and only carry a `/` between a directory and a file name
//! when a directory component exists.

use std::path::{Component, Path};

/// Strip a single leading `/` or `\`.
#[inline]
pub fn strip_leading_separator(url: &str) -> &str {
    url.strip_prefix(['/', '\\']).unwrap_or(url)
}

/// Convert a relative directory path to a URL prefix (`""` or `"a/b/"`).
pub fn dir_url_prefix(rel_dir: &Path) -> String {
    let mut prefix = String::new();
    for component in rel_dir.components() {
        if let Component::Normal(name) = component {
            prefix.push_str(&name.to_string_lossy());
            prefix.push('/');
        }
    }
    prefix
}

/// Append one directory segment to a URL prefix.
#[inline]
pub fn push_dir(prefix: &str, dir_name: &str) -> String {
    let mut next = String::with_capacity(prefix.len() + dir_name.len() + 1);
    next.push_str(prefix);
    next.push_str(dir_name);
    next.push('/');
    next
}

/// Join a URL prefix and a file name.
///
/// # Examples
/// ```ignore
/// assert_eq!(join_url("", "index.htm"), "index.htm");
/// assert_eq!(join_url("blog", "post.php"), "blog/post.php");
/// assert_eq!(join_url("/blog/", "post.php"), "blog/post.php");
/// ```
pub fn join_url(prefix: &str, file_name: &str) -> String {
    let prefix = strip_leading_separator(prefix).replace('\\', "/");
    if prefix.is_empty() {
        file_name.to_string()
    } else if prefix.ends_with('/') {
        format!("{prefix}{file_name}")
    } else {
        format!("{prefix}/{file_name}")
    }
}
