//! Grouping clips into acts.

use cutlist_audit_model::{Act, ActTable, ClipRecord};

/// A clip with its report-wide sequence number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberedClip<'a> {
    /// 1-based, increasing in input order across all acts.
    pub number: usize,
    pub clip: &'a ClipRecord,
}

/// The clips assigned to one act.
#[derive(Debug, Clone, PartialEq)]
pub struct ActBucket<'a> {
    pub act: &'a Act,
    pub clips: Vec<NumberedClip<'a>>,
}

/// Number every labelled clip in input order and place it in its act.
///
/// Returns one bucket per act, in table order, including empty ones.
pub fn bucket_clips<'a>(clips: &'a [ClipRecord], acts: &'a ActTable) -> Vec<ActBucket<'a>> {
    let mut buckets: Vec<ActBucket<'a>> = acts
        .acts()
        .iter()
        .map(|act| ActBucket { act, clips: vec![] })
        .collect();

    for (i, clip) in clips.iter().filter(|c| c.has_label()).enumerate() {
        if !acts.covers(clip.start_frame) {
            if clip.start_frame < 0 {
                tracing::warn!(
                    start_frame = clip.start_frame,
                    "Clip starts before frame 0, placing it in the last act"
                );
            } else {
                tracing::debug!(
                    start_frame = clip.start_frame,
                    "Clip starts outside every act, placing it in the last act"
                );
            }
        }
        buckets[acts.classify(clip.start_frame)]
            .clips
            .push(NumberedClip {
                number: i + 1,
                clip,
            });
    }

    buckets
}
