//! The one command: load config, scan, write the sitemap.

use crate::{
    cli::Cli,
    config::SitemapConfig,
    debug,
    generator::{self, SitemapSummary},
    log,
};
use anyhow::{Context, Result};

/// Run a full generation for the parsed CLI arguments.
pub fn run(cli: &Cli) -> Result<SitemapSummary> {
    let config = SitemapConfig::load(cli).context("failed to load configuration")?;

    log!("scan"; "{}", config.source.display());
    if !config.extensions.is_empty() {
        debug!("scan"; "additional extensions: {}", config.extensions.join(", "));
    }
    if !config.ignore.is_empty() {
        debug!("scan"; "ignoring: {}", config.ignore.join(", "));
    }

    let summary = generator::generate(&config)?;

    log!("sitemap"; "wrote {} url{} to {}",
        summary.urls,
        if summary.urls == 1 { "" } else { "s" },
        summary.xml_path.display());
    if let Some(path) = &summary.gzip_path {
        log!("sitemap"; "compressed copy: {}", path.display());
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GenerateError;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_with_extra_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let source = dir.path().to_str().unwrap();

        let cli =
            Cli::try_parse_from(["offline-sitemap", source, "--extensions", "txt,md"]).unwrap();
        let summary = run(&cli).unwrap();

        assert_eq!(summary.urls, 1);
        let xml = fs::read_to_string(&summary.xml_path).unwrap();
        assert!(xml.contains("<loc>notes.txt</loc>"));
    }

    #[test]
    fn test_run_missing_source() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let cli = Cli::try_parse_from(["offline-sitemap", missing.to_str().unwrap()]).unwrap();

        let err = run(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::InvalidSourcePath(_))
        ));
        assert!(!missing.join("sitemap.xml").exists());
    }

    #[test]
    fn test_run_ignore_option_filters() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.htm"), "x").unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("drafts/wip.htm"), "x").unwrap();
        let source = dir.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["offline-sitemap", source, "-i", "drafts"]).unwrap();
        assert_eq!(run(&cli).unwrap().urls, 1);
    }
}
