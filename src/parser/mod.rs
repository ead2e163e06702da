pub mod handlers;
pub mod text;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use scraper::Html;
use thiserror::Error;
use tracing::debug;

use crate::output::{Record, Source};

/// A located result fragment that cannot be turned into a record.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no year digits in venue text {0:?}")]
    MissingYearDigits(String),
}

/// Parse one saved result page and extract every citation on it, each
/// stamped with the page's base file name. Returns an empty vec for pages
/// without a result container. An unreadable file or a fragment the
/// handler rejects is a hard error.
pub fn extract_document(path: &Path, source: Source) -> Result<Vec<Record>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let html = String::from_utf8_lossy(&bytes);
    let document = Html::parse_document(&html);

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let fragments = handlers::locate(source, &document);
    debug!("{}: {} candidate fragments", path.display(), fragments.len());

    let mut records = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let mut record = handlers::extract(source, fragment)
            .with_context(|| format!("failed to extract an entry from {}", path.display()))?;
        record.filename = filename.clone();
        records.push(record);
    }
    Ok(records)
}

// ── Tests ──
