//! Sitemap emission.
//!
//! Writes `sitemap.xml` inside the source directory and, in the same pass,
//! a gzip copy through a [`tee::TeeWriter`]. The gzip file decompresses to
//! exactly the bytes of the plain file.
//!
//! Writing is not transactional: if anything fails after the output files
//! were created, both are removed so no truncated sitemap is left behind.

pub mod sitemap;
pub mod tee;

use crate::config::SitemapConfig;
use crate::debug;
use crate::scan;
use crate::utils::path::normalize_path;
use flate2::{Compression, write::GzEncoder};
use sitemap::SitemapWriter;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tee::{Sink, TeeWriter};
use thiserror::Error;

/// Fatal generation errors. Unreadable subdirectories are not among them:
/// the scanner logs and skips those.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("source directory not found: `{0}`")]
    InvalidSourcePath(PathBuf),

    #[error("could not open `{0}` for writing")]
    OutputOpen(PathBuf, #[source] io::Error),

    #[error("gzip copy would overwrite the sitemap at `{0}`")]
    OutputCollision(PathBuf),

    #[error("failed while writing `{0}`")]
    Write(PathBuf, #[source] io::Error),
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapSummary {
    pub urls: usize,
    pub xml_path: PathBuf,
    pub gzip_path: Option<PathBuf>,
}

/// Scan the configured source tree and write the sitemap artifacts.
pub fn generate(config: &SitemapConfig) -> Result<SitemapSummary, GenerateError> {
    if !config.source.is_dir() {
        return Err(GenerateError::InvalidSourcePath(config.source.clone()));
    }

    let xml_path = config.output_path();
    let gzip_path = config.gzip_path();

    // Compared before either file is truncated.
    let gzip_target = gzip_path.as_deref().map(output_target);
    if gzip_target.as_ref() == Some(&output_target(&xml_path)) {
        return Err(GenerateError::OutputCollision(xml_path));
    }

    let plain = File::create(&xml_path)
        .map_err(|err| GenerateError::OutputOpen(xml_path.clone(), err))?;
    let gzip = match &gzip_path {
        Some(path) => match File::create(path) {
            Ok(file) => Some(file),
            Err(err) => {
                drop(plain);
                remove_quietly(&xml_path);
                return Err(GenerateError::OutputOpen(path.clone(), err));
            }
        },
        None => None,
    };

    let mut excluded = vec![xml_path.clone()];
    excluded.extend(gzip_target);

    let extensions = config.extension_set();
    let ignore = config.ignore_list();
    let scanner =
        scan::scan(&config.source, &config.source, &extensions, &ignore).exclude(excluded);

    debug!("sitemap"; "extensions: {}", extensions.sorted().join(", "));

    match write_sitemap(scanner, plain, gzip) {
        Ok(urls) => Ok(SitemapSummary {
            urls,
            xml_path,
            gzip_path,
        }),
        Err((sink, err)) => {
            remove_quietly(&xml_path);
            if let Some(path) = &gzip_path {
                remove_quietly(path);
            }
            let failed = match (sink, gzip_path) {
                (Sink::Secondary, Some(path)) => path,
                _ => xml_path,
            };
            Err(GenerateError::Write(failed, err))
        }
    }
}

/// Stream every match into the plain sink and the optional gzip sink.
///
/// Both sinks are consumed here and closed before returning. On error the
/// sink that failed is reported with it.
fn write_sitemap<A: Write, B: Write>(
    scanner: scan::Scanner<'_>,
    plain: A,
    gzip: Option<B>,
) -> Result<usize, (Sink, io::Error)> {
    let encoder = gzip.map(|sink| GzEncoder::new(BufWriter::new(sink), Compression::default()));
    let mut tee = TeeWriter::new(BufWriter::new(plain), encoder);

    let result = stream(scanner, &mut tee).and_then(|urls| tee.finish().map(|()| urls));
    result.map_err(|err| (tee.failed().unwrap_or(Sink::Primary), err))
}

fn stream(scanner: scan::Scanner<'_>, sink: impl Write) -> io::Result<usize> {
    let mut sitemap = SitemapWriter::new(sink)?;
    for file in scanner {
        debug!("sitemap"; "{}", file.relative_path);
        sitemap.write_url(&file)?;
    }
    let (_, urls) = sitemap.finish()?;
    Ok(urls)
}

/// Absolute form of an output path. The directory is resolved even when the
/// file does not exist yet.
fn output_target(path: &Path) -> PathBuf {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !path.exists() => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            normalize_path(parent).join(name)
        }
        _ => normalize_path(path),
    }
}

fn remove_quietly(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        debug!("sitemap"; "could not remove {}: {}", path.display(), err);
    }
}
