use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

const COLUMNS: [&str; 6] = ["title", "description", "year", "url", "datasource", "filename"];

/// Which result layout a citation was extracted from. The serialized form
/// doubles as the datasource tag in the CSV and the input directory suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Ieee,
    Acm,
    GoogleScholar,
}

impl Source {
    /// Stable lowercase tag, identical to the serialized form.
    pub fn tag(self) -> &'static str {
        match self {
            Source::Ieee => "ieee",
            Source::Acm => "acm",
            Source::GoogleScholar => "google-scholar",
        }
    }
}

/// One extracted citation. Field order here is the CSV column order.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    pub title: String,
    pub description: String,
    pub year: String,
    pub url: String,
    pub datasource: Source,
    pub filename: String,
}

/// Write all records to a single CSV file at `path`, creating or truncating
/// it. The header row is always present, even for an empty batch.
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer
        .write_record(COLUMNS)
        .with_context(|| format!("failed to write the header to {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("failed to write a record to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    debug!("{} records written to {}", records.len(), path.display());
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn record(title: &str, source: Source) -> Record {
        Record {
            title: title.to_string(),
            description: String::new(),
            year: "2020".to_string(),
            url: "https://example.org/a".to_string(),
            datasource: source,
            filename: "page1.html".to_string(),
        }
    }

    #[test]
    fn source_tags() {
        assert_eq!(Source::Ieee.tag(), "ieee");
        assert_eq!(Source::Acm.tag(), "acm");
        assert_eq!(Source::GoogleScholar.tag(), "google-scholar");
    }

    #[test]
    fn header_written_even_without_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_records(&path, &[]).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "title,description,year,url,datasource,filename\n"
        );
    }

    #[test]
    fn records_serialize_with_kebab_case_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_records(&path, &[record("Alpha", Source::GoogleScholar)]).unwrap();
        let csv = fs::read_to_string(&path).unwrap();
        assert!(csv.contains("Alpha,,2020,https://example.org/a,google-scholar,page1.html"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut rec = record("Beta", Source::Acm);
        rec.description = "Sorting, searching, and selection".to_string();
        write_records(&path, &[rec]).unwrap();
        let csv = fs::read_to_string(&path).unwrap();
        assert!(csv.contains("\"Sorting, searching, and selection\""));
    }

    #[test]
    fn rerun_truncates_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![record("Alpha", Source::Ieee), record("Beta", Source::Ieee)];
        write_records(&path, &rows).unwrap();
        write_records(&path, &[record("Gamma", Source::Ieee)]).unwrap();
        let csv = fs::read_to_string(&path).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(!csv.contains("Beta"));
    }
}
