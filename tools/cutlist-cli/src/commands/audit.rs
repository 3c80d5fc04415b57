//! Extract and render in one step.

use std::path::PathBuf;

use cutlist_extractor::{extract_with_stats, MemoryHost};
use cutlist_reporter::{render, ReportOptions};

use super::write_output;

pub fn run(timeline: PathBuf, output: Option<PathBuf>, options: &ReportOptions) -> anyhow::Result<()> {
    let host = MemoryHost::load(&timeline)
        .map_err(|e| anyhow::anyhow!("Failed to load timeline: {e}"))?;

    let (audit, stats) = extract_with_stats(&host)?;
    eprintln!(
        "Audit complete: Found {} clips ({} skipped without text).",
        stats.clips_emitted, stats.clips_skipped
    );

    let markdown = render(&audit, options);
    write_output(output.as_deref(), &markdown)
}
