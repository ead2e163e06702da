use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::output::{Record, Source};
use crate::parser;

/// Extract every page saved under `dir`, appending the records to `out`,
/// and report how many the directory contributed. A missing directory is
/// skipped with a notice and contributes nothing; an unreadable file or a
/// rejected fragment aborts the whole batch.
pub fn run_batch(dir: &Path, source: Source, out: &mut Vec<Record>) -> Result<usize> {
    if !dir.exists() {
        println!("Path {} not found", dir.display());
        return Ok(0);
    }
    println!("Checking {}", dir.display());

    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to list {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to read an entry in {}", dir.display()))?;
    debug!(
        "{}: {} files under {}",
        source.tag(),
        entries.len(),
        dir.display()
    );

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let mut extracted = 0;
    for entry in entries {
        let records = parser::extract_document(&entry.path(), source)?;
        extracted += records.len();
        out.extend(records);
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("Extracted {} entries", extracted);
    Ok(extracted)
}

// ── Tests ──
