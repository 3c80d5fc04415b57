//! Render a Markdown cut list from an audit payload.

use std::path::PathBuf;

use cutlist_audit_model::AuditPayload;
use cutlist_common::error::CutlistError;
use cutlist_reporter::{render, ReportOptions};

use super::write_output;

pub fn run(payload: PathBuf, output: Option<PathBuf>, options: &ReportOptions) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&payload)
        .map_err(|_| anyhow::anyhow!("Payload file not found: {}", payload.display()))?;

    let audit = AuditPayload::decode(&raw)
        .map_err(CutlistError::from)?
        .into_result()
        .map_err(CutlistError::from)?;

    tracing::info!(clips = audit.clips.len(), fps = audit.frame_rate, "Payload decoded");
    if !audit.is_sorted() {
        tracing::warn!("Payload clips are not ordered by start frame");
    }

    let markdown = render(&audit, options);
    write_output(output.as_deref(), &markdown)
}
