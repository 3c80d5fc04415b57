//! Sequence traversal.

use cutlist_audit_model::{sort_by_start, AuditFailure, AuditPayload, ClipRecord, SequenceAudit};
use cutlist_common::error::{CutlistError, CutlistResult};

use crate::host::{HostApp, HostClip, HostSequence};
use crate::text::{resolve_clip_text, trim_host_text};
use crate::timebase::{parse_ticks, TimeBase};

/// Counters from one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub tracks: usize,
    pub clips_seen: usize,
    pub clips_emitted: usize,
    /// Clips dropped because they resolved to empty text.
    pub clips_skipped: usize,
}

/// Extract an audit from the host's active sequence.
pub fn extract(host: &dyn HostApp) -> CutlistResult<SequenceAudit> {
    extract_with_stats(host).map(|(audit, _)| audit)
}

/// Extract an audit and report traversal counters alongside it.
///
/// Either the whole sequence is read or an error is returned; partial
/// clip lists are never produced.
pub fn extract_with_stats(host: &dyn HostApp) -> CutlistResult<(SequenceAudit, ExtractionStats)> {
    let sequence = host
        .active_sequence()?
        .ok_or(CutlistError::NoActiveSequence)?;
    extract_sequence(sequence)
}

/// Run an extraction and wrap the outcome for the host boundary.
pub fn extract_payload(host: &dyn HostApp) -> AuditPayload {
    match extract(host) {
        Ok(audit) => AuditPayload::Audit(audit),
        Err(e) => {
            tracing::error!(error = %e, "Extraction failed");
            AuditPayload::Failure(
                e.to_failure()
                    .unwrap_or_else(|| AuditFailure::host_script(e.to_string())),
            )
        }
    }
}

fn extract_sequence(sequence: &dyn HostSequence) -> CutlistResult<(SequenceAudit, ExtractionStats)> {
    let raw_timebase = sequence.timebase()?;
    let time_base = TimeBase::resolve(raw_timebase.as_deref());
    if time_base.is_fallback() {
        tracing::warn!(
            timebase = ?raw_timebase,
            fps = time_base.frame_rate(),
            "Sequence time base unusable, using fallback frame rate"
        );
    }

    let raw_end = sequence.end_ticks()?;
    let end_ticks = parse_ticks(&raw_end)
        .filter(|t| t.is_finite())
        .ok_or_else(|| {
            CutlistError::host_script(format!("sequence end {raw_end:?} is not a tick count"))
        })?;
    let total_duration_frames = time_base.ticks_to_frames(end_ticks);

    tracing::info!(
        fps = time_base.frame_rate(),
        ticks_per_frame = time_base.ticks_per_frame(),
        total_duration_frames,
        "Extracting sequence audit"
    );

    let mut stats = ExtractionStats {
        tracks: sequence.track_count()?,
        ..Default::default()
    };
    let mut clips = Vec::new();

    for track_pos in 0..stats.tracks {
        let track = sequence.track(track_pos)?;
        let track_index = u32::try_from(track_pos + 1)
            .map_err(|_| CutlistError::host_script("track count exceeds u32"))?;

        for clip_pos in 0..track.clip_count()? {
            let clip = track.clip(clip_pos)?;
            stats.clips_seen += 1;

            match clip_record(clip, &time_base, track_index)? {
                Some(record) => clips.push(record),
                None => {
                    stats.clips_skipped += 1;
                    tracing::debug!(
                        track = track_index,
                        clip = clip_pos,
                        "Clip has no text, skipping"
                    );
                }
            }
        }
    }

    sort_by_start(&mut clips);
    stats.clips_emitted = clips.len();

    tracing::info!(
        tracks = stats.tracks,
        clips = stats.clips_emitted,
        skipped = stats.clips_skipped,
        "Sequence audit complete"
    );

    Ok((
        SequenceAudit::new(time_base.frame_rate(), total_duration_frames, clips),
        stats,
    ))
}

/// Build the record for one clip, or `None` when it has no text.
fn clip_record(
    clip: &dyn HostClip,
    time_base: &TimeBase,
    track_index: u32,
) -> CutlistResult<Option<ClipRecord>> {
    let raw_name = clip.name()?.unwrap_or_default();
    let name = trim_host_text(&raw_name);

    let resolved = resolve_clip_text(clip, name);
    if resolved.text.is_empty() {
        return Ok(None);
    }
    tracing::trace!(text = %resolved.text, source = ?resolved.source, "Resolved clip text");

    let start_frame = time_base.seconds_to_frames(clip.start_seconds()?);
    let end_frame = time_base.seconds_to_frames(clip.end_seconds()?);

    Ok(Some(ClipRecord::new(
        resolved.text,
        name,
        start_frame,
        end_frame,
        track_index,
    )))
}
