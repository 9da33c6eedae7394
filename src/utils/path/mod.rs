//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `relative_to`)
//! - [`route`]: Site-relative URL building (`join_url`, `push_dir`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, relative_to};
pub use route::{dir_url_prefix, join_url, push_dir};
