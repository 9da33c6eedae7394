//! File-extension allow-list.

use rustc_hash::FxHashSet;

/// Canonical default extension list.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "asp", "aspx", "cfm", "do", "htm", "html", "jhtml", "jsp", "jspx", "php", "php4", "php3",
    "phtml", "py", "rb", "rhtml", "rss", "shtml", "xhtml", "yaws",
];

/// Short default list, selected with `--minimal-defaults`.
pub const MINIMAL_EXTENSIONS: &[&str] = &["htm", "php", "asp", "aspx", "jsp", "py", "shtml"];

/// Set of lowercase extensions (no leading dot) used as a membership filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    exts: FxHashSet<String>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the default list, full or minimal.
    pub fn with_defaults(minimal: bool) -> Self {
        let defaults = if minimal {
            MINIMAL_EXTENSIONS
        } else {
            DEFAULT_EXTENSIONS
        };
        let mut set = Self::new();
        set.extend(defaults.iter().copied());
        set
    }

    /// Add one extension. Whitespace and leading dots are dropped, empty
    /// entries are ignored.
    pub fn insert(&mut self, ext: &str) -> bool {
        let ext = normalize(ext);
        !ext.is_empty() && self.exts.insert(ext)
    }

    pub fn extend<'a>(&mut self, exts: impl IntoIterator<Item = &'a str>) {
        for ext in exts {
            self.insert(ext);
        }
    }

    /// Case-insensitive lookup of an extension.
    pub fn contains(&self, ext: &str) -> bool {
        self.exts.contains(&ext.to_lowercase())
    }

    /// Whether the file name's extension is in the set.
    ///
    /// The extension is everything after the final `.` of the name, so
    /// `.htaccess` has extension `htaccess` and `README` has none.
    pub fn matches_name(&self, file_name: &str) -> bool {
        file_extension(file_name).is_some_and(|ext| self.contains(ext))
    }

    /// Sorted view, for display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.exts.iter().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}

/// Substring after the final `.`, if any.
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

fn normalize(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}
