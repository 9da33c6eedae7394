//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Offline sitemap generator: scan a directory tree and write sitemap.xml
#[derive(Parser, Debug, Clone)]
#[command(
    name = "offline-sitemap",
    version,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Source directory to scan (sitemap.xml is written inside it)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub source: PathBuf,

    /// Destination directory (accepted for compatibility, currently unused)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub destination: Option<PathBuf>,

    /// Additional file extensions to include, comma separated (e.g. `txt,md`)
    #[arg(short, long, value_delimiter = ',', value_name = "LIST")]
    pub extensions: Vec<String>,

    /// File or directory names/paths to skip, comma separated
    #[arg(short, long, value_delimiter = ',', value_name = "LIST")]
    pub ignore: Vec<String>,

    /// Config file path (TOML)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output file name, written inside the source directory
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Write the gzip copy to this path instead of next to the sitemap
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub gzip_output: Option<PathBuf>,

    /// Do not write the gzip copy
    #[arg(long, conflicts_with = "gzip_output")]
    pub no_gzip: bool,

    /// Start from the short default extension list (htm, php, asp, aspx, jsp, py, shtml)
    #[arg(long)]
    pub minimal_defaults: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_only() {
        let cli = Cli::try_parse_from(["offline-sitemap", "site"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("site"));
        assert!(cli.destination.is_none());
        assert!(cli.extensions.is_empty());
        assert!(!cli.no_gzip);
    }

    #[test]
    fn test_parse_comma_lists() {
        let cli = Cli::try_parse_from([
            "offline-sitemap",
            "site",
            "out",
            "-e",
            "txt,md",
            "--ignore",
            "drafts,tmp",
        ])
        .unwrap();
        assert_eq!(cli.destination, Some(PathBuf::from("out")));
        assert_eq!(cli.extensions, vec!["txt", "md"]);
        assert_eq!(cli.ignore, vec!["drafts", "tmp"]);
    }

    #[test]
    fn test_missing_source_is_error() {
        assert!(Cli::try_parse_from(["offline-sitemap"]).is_err());
    }

    #[test]
    fn test_no_gzip_conflicts_with_gzip_output() {
        let result = Cli::try_parse_from([
            "offline-sitemap",
            "site",
            "--no-gzip",
            "--gzip-output",
            "x.gz",
        ]);
        assert!(result.is_err());
    }
}
