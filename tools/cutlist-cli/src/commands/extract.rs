//! Extract an audit payload from a timeline snapshot.

use std::path::PathBuf;

use cutlist_extractor::{extract_payload, MemoryHost};

use super::write_output;

pub fn run(timeline: PathBuf, output: Option<PathBuf>, pretty: bool) -> anyhow::Result<()> {
    let host = MemoryHost::load(&timeline)
        .map_err(|e| anyhow::anyhow!("Failed to load timeline: {e}"))?;

    let payload = extract_payload(&host);
    let mut encoded = if pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        payload.encode()?
    };
    encoded.push('\n');
    write_output(output.as_deref(), &encoded)?;

    match payload.into_result() {
        Ok(audit) => {
            eprintln!("Audit complete: Found {} clips.", audit.clips.len());
            Ok(())
        }
        Err(failure) => anyhow::bail!("Extraction failed: {failure}"),
    }
}
