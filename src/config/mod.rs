//! Generator configuration: optional TOML file plus CLI overrides.
//!
//! # Example
//!
//! ```toml
//! extensions = ["txt", "md"]      # appended to the default list
//! ignore = ["drafts", "blog/old.php"]
//! output = "sitemap.xml"          # file name inside the source directory
//! gzip = true                     # also write a gzip copy
//! gzip_output = "sitemap.xml.gz"  # relative to the source directory
//! minimal_defaults = false        # start from the short default list
//! ```
//!
//! The loaded value is immutable and passed by reference to the scanner
//! and the emitter.

mod error;
pub mod extensions;

pub use error::ConfigError;
pub use extensions::ExtensionSet;

use crate::{cli::Cli, debug, log, scan::IgnoreList};
use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default name of the plain sitemap file.
pub const DEFAULT_OUTPUT: &str = "sitemap.xml";

/// Suffix appended to the output name for the gzip copy.
pub const GZIP_SUFFIX: &str = ".gz";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Absolute source directory (internal use only)
    #[serde(skip)]
    pub source: PathBuf,

    /// Extra extensions, appended to the defaults.
    pub extensions: Vec<String>,

    /// Names or source-relative paths to skip.
    pub ignore: Vec<String>,

    /// Output file name inside the source directory.
    pub output: String,

    /// Write a gzip copy.
    pub gzip: bool,

    /// Gzip copy location. Relative paths from the config file resolve
    /// against the source directory.
    pub gzip_output: Option<PathBuf>,

    /// Start from the short default extension list.
    pub minimal_defaults: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            extensions: Vec::new(),
            ignore: Vec::new(),
            output: DEFAULT_OUTPUT.to_string(),
            gzip: true,
            gzip_output: None,
            minimal_defaults: false,
        }
    }
}

impl SitemapConfig {
    /// Load configuration from CLI arguments (and the config file they name).
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        config.source = crate::utils::path::normalize_path(&cli.source);
        if let Some(path) = config.gzip_output.take() {
            config.gzip_output = Some(config.source.join(path));
        }
        config.apply_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring: {}", path.display(), ignored.join(", "));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Overlay CLI options. Lists are concatenated, flags win when given.
    fn apply_cli(&mut self, cli: &Cli) {
        self.extensions.extend(cli.extensions.iter().cloned());
        self.ignore.extend(cli.ignore.iter().cloned());

        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if let Some(path) = &cli.gzip_output {
            self.gzip = true;
            self.gzip_output = Some(path.clone());
        }
        if cli.no_gzip {
            self.gzip = false;
        }
        if cli.minimal_defaults {
            self.minimal_defaults = true;
        }
        if let Some(destination) = &cli.destination {
            debug!("config"; "destination {} is not used", destination.display());
        }
    }

    /// Validate configuration, collecting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        let output = self.output.trim();
        if output.is_empty() || output == "." || output == ".." {
            problems.push(format!("output `{}` is not a file name", self.output));
        } else if output.contains(['/', '\\']) {
            problems.push(format!(
                "output `{}` must be a file name, not a path",
                self.output
            ));
        }

        for ext in &self.extensions {
            if ext.contains(['/', '\\']) {
                problems.push(format!("extension `{ext}` contains a path separator"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems.join("; ")).into())
        }
    }

    /// Active extension allow-list.
    pub fn extension_set(&self) -> ExtensionSet {
        let mut set = ExtensionSet::with_defaults(self.minimal_defaults);
        set.extend(self.extensions.iter().map(String::as_str));
        set
    }

    pub fn ignore_list(&self) -> IgnoreList {
        IgnoreList::new(&self.ignore)
    }

    /// Plain sitemap path, always inside the source directory.
    pub fn output_path(&self) -> PathBuf {
        self.source.join(self.output.trim())
    }

    /// Gzip copy path, `None` when disabled.
    pub fn gzip_path(&self) -> Option<PathBuf> {
        if !self.gzip {
            return None;
        }
        Some(match &self.gzip_output {
            Some(path) => path.clone(),
            None => self
                .source
                .join(format!("{}{}", self.output.trim(), GZIP_SUFFIX)),
        })
    }
}
