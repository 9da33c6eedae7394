//! Source tree scanning.
//!
//! Walks the source directory depth-first and yields one [`MatchedFile`]
//! per regular file whose extension is in the active [`ExtensionSet`].
//!
//! ```text
//! site/
//! ├── index.htm           -> index.htm
//! ├── logo.png            -> (extension not listed, skipped)
//! └── blog/
//!     ├── post.php        -> blog/post.php
//!     └── 2024/
//!         └── jan.htm     -> blog/2024/jan.htm
//! ```
//!
//! At each level the files come first (sorted by name, ignoring case), then
//! each subdirectory is walked in full, also in name order. Hidden entries
//! (names starting with `.`) are neither listed nor entered. Directories
//! that are missing are skipped silently; directories that cannot be read
//! are skipped with a warning. Neither aborts the walk.

mod ignore;

pub use ignore::IgnoreList;

use crate::config::ExtensionSet;
use crate::utils::{
    date::format_lastmod,
    path::{dir_url_prefix, join_url, push_dir, relative_to},
};
use crate::{debug, log};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A file selected for the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    /// Forward-slash path from the source root, e.g. `blog/post.php`.
    pub relative_path: String,
    /// Modification time, local ISO-8601.
    pub last_modified: String,
}

/// Directory waiting to be listed, with its URL prefix (`""` or `"a/b/"`).
struct PendingDir {
    path: PathBuf,
    prefix: String,
    /// Canonical paths of the directories above this one.
    ancestors: Rc<FxHashSet<PathBuf>>,
}

/// Lazy depth-first walk over a source tree.
///
/// Single pass: once exhausted it yields nothing more.
pub struct Scanner<'a> {
    extensions: &'a ExtensionSet,
    ignore: &'a IgnoreList,
    excluded: FxHashSet<PathBuf>,
    pending: Vec<PendingDir>,
    ready: VecDeque<MatchedFile>,
}

/// Start a scan of `current`, with `<loc>` values relative to `base`.
///
/// `current` is normally `base` itself. When it is not inside `base` the
/// paths fall back to being relative to `current`.
pub fn scan<'a>(
    current: &Path,
    base: &Path,
    extensions: &'a ExtensionSet,
    ignore: &'a IgnoreList,
) -> Scanner<'a> {
    let prefix = match relative_to(current, base) {
        Some(rel) => dir_url_prefix(&rel),
        None => {
            log!("warning"; "{} is not inside {}", current.display(), base.display());
            String::new()
        }
    };
    Scanner::with_prefix(current, prefix, extensions, ignore)
}

impl<'a> Scanner<'a> {
    fn with_prefix(
        root: &Path,
        prefix: String,
        extensions: &'a ExtensionSet,
        ignore: &'a IgnoreList,
    ) -> Self {
        Self {
            extensions,
            ignore,
            excluded: FxHashSet::default(),
            pending: vec![PendingDir {
                path: root.to_path_buf(),
                prefix,
                ancestors: Rc::default(),
            }],
            ready: VecDeque::new(),
        }
    }

    /// Never report these files, even if their extension matches.
    ///
    /// Used to keep the generated sitemap out of its own listing.
    pub fn exclude(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.excluded.extend(paths);
        self
    }

    /// List one directory: queue its matching files, then push its
    /// subdirectories so the first one is walked next.
    fn visit(&mut self, dir: PendingDir) {
        if !dir.path.is_dir() {
            return;
        }

        // Symlinked directories are followed. A directory that is its own
        // ancestor would recurse forever; plain aliases are walked again.
        let ancestors = match dir.path.canonicalize() {
            Ok(canonical) if dir.ancestors.contains(&canonical) => {
                log!("warning"; "skipping {}: symlink cycle back to {}", dir.path.display(), canonical.display());
                return;
            }
            Ok(canonical) => {
                let mut chain = (*dir.ancestors).clone();
                chain.insert(canonical);
                Rc::new(chain)
            }
            Err(_) => Rc::clone(&dir.ancestors),
        };

        let entries = match fs::read_dir(&dir.path) {
            Ok(entries) => entries,
            Err(err) => {
                log!("warning"; "cannot read directory {}: {}", dir.path.display(), err);
                return;
            }
        };

        let mut names: Vec<(String, PathBuf)> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some((entry.file_name().to_string_lossy().into_owned(), entry.path())),
                Err(err) => {
                    log!("warning"; "bad entry in {}: {}", dir.path.display(), err);
                    None
                }
            })
            .collect();
        names.sort_unstable_by(|a, b| {
            a.0.to_lowercase()
                .cmp(&b.0.to_lowercase())
                .then_with(|| a.0.cmp(&b.0))
        });

        debug!("scan"; "{} ({} entries)", dir.path.display(), names.len());

        let mut subdirs = Vec::new();
        for (name, path) in names {
            if name.starts_with('.') {
                continue;
            }

            // Follows symlinks, like `is_dir()` / `is_file()`.
            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(err) => {
                    log!("warning"; "cannot stat {}: {}", path.display(), err);
                    continue;
                }
            };

            let rel_path = join_url(&dir.prefix, &name);
            if self.ignore.is_ignored(&name, &rel_path) {
                debug!("scan"; "ignored {}", rel_path);
                continue;
            }

            if metadata.is_dir() {
                subdirs.push(PendingDir {
                    prefix: push_dir(&dir.prefix, &name),
                    path,
                    ancestors: Rc::clone(&ancestors),
                });
            } else if metadata.is_file()
                && self.extensions.matches_name(&name)
                && !self.excluded.contains(&path)
            {
                let modified = match metadata.modified() {
                    Ok(modified) => modified,
                    Err(err) => {
                        log!("warning"; "no modification time for {}: {}", path.display(), err);
                        continue;
                    }
                };
                self.ready.push_back(MatchedFile {
                    relative_path: rel_path,
                    last_modified: format_lastmod(modified),
                });
            }
        }

        self.pending.extend(subdirs.into_iter().rev());
    }
}

impl Iterator for Scanner<'_> {
    type Item = MatchedFile;

    fn next(&mut self) -> Option<MatchedFile> {
        loop {
            if let Some(file) = self.ready.pop_front() {
                return Some(file);
            }
            let dir = self.pending.pop()?;
            self.visit(dir);
        }
    }
}
