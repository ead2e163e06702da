mod batch;
mod output;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use output::Source;

/// Scan order for the per-datasource input directories.
const SOURCES: [Source; 3] = [Source::Acm, Source::Ieee, Source::GoogleScholar];

#[derive(Parser)]
#[command(
    name = "citation_extractor",
    about = "Extract citation entries from saved search result pages into a single CSV"
)]
struct Cli {
    /// Directory holding the html-<datasource> input directories
    #[arg(long, default_value = ".")]
    input_root: PathBuf,
    /// Path of the consolidated CSV to write
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut records = Vec::new();
    for source in SOURCES {
        let dir = cli.input_root.join(format!("html-{}", source.tag()));
        batch::run_batch(&dir, source, &mut records)?;
    }

    output::write_records(&cli.output, &records)?;
    println!("Wrote {} records to {}", records.len(), cli.output.display());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
