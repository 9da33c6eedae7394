//! Ignore list matching.
//!
//! An entry matches when it equals either the bare name of a file or
//! directory, or its full source-relative path:
//!
//! ```text
//! drafts          -> skips every file or directory named `drafts`
//! blog/old.php    -> skips only that file
//! /tmp/           -> same as `tmp` (outer slashes are dropped)
//! ```
//!
//! Ignored directories are not descended into.

use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    entries: FxHashSet<String>,
}

impl IgnoreList {
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Self {
        let entries = entries
            .iter()
            .map(|entry| normalize(entry.as_ref()))
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { entries }
    }

    /// `rel_path` is the forward-slash path from the source root.
    pub fn is_ignored(&self, name: &str, rel_path: &str) -> bool {
        !self.entries.is_empty()
            && (self.entries.contains(name) || self.entries.contains(rel_path.trim_matches('/')))
    }
}

fn normalize(entry: &str) -> String {
    entry.trim().replace('\\', "/").trim_matches('/').to_string()
}
