//! Sequence-level audit produced by one extraction run.

use serde::{Deserialize, Deserializer, Serialize};

use crate::clip::{ClipRecord, FrameNumber};

/// Immutable snapshot of a sequence: timing metadata plus clip records
/// sorted by start frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceAudit {
    /// Frames per second. Zero when the producer did not supply one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub frame_rate: f64,

    /// Sequence length in frames. Zero when the producer wrote `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_duration_frames: FrameNumber,

    /// Clip records, ascending by `start_frame`.
    pub clips: Vec<ClipRecord>,
}

impl SequenceAudit {
    pub fn new(frame_rate: f64, total_duration_frames: FrameNumber, clips: Vec<ClipRecord>) -> Self {
        Self {
            frame_rate,
            total_duration_frames,
            clips,
        }
    }

    /// Whether the frame rate can be divided by.
    pub fn has_frame_rate(&self) -> bool {
        usable_frame_rate(self.frame_rate).is_some()
    }

    /// Clips that carry a label, in input order.
    pub fn labelled_clips(&self) -> impl Iterator<Item = &ClipRecord> {
        self.clips.iter().filter(|c| c.has_label())
    }

    /// Whether clips are ordered by start frame.
    pub fn is_sorted(&self) -> bool {
        self.clips
            .windows(2)
            .all(|pair| pair[0].start_frame <= pair[1].start_frame)
    }
}

/// Older producers write `null` where rounding a non-number failed.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `Some(rate)` for a finite, non-zero frame rate.
pub fn usable_frame_rate(frame_rate: f64) -> Option<f64> {
    (frame_rate.is_finite() && frame_rate != 0.0).then_some(frame_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SequenceAudit {
        SequenceAudit::new(
            24.0,
            1440,
            vec![
                ClipRecord::new("Start", "Start", 0, 48, 1),
                ClipRecord::new("Hero Enters", "Graphic", 1300, 1340, 1),
            ],
        )
    }

    #[test]
    fn test_audit_wire_format() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"frameRate\":24.0"));
        assert!(json.contains("\"totalDurationFrames\":1440"));
        assert!(json.contains("\"clips\":["));
    }

    #[test]
    fn test_audit_serialization_roundtrip() {
        let audit = sample();
        let json = serde_json::to_string_pretty(&audit).unwrap();
        let parsed: SequenceAudit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, audit);
    }

    #[test]
    fn test_missing_frame_rate_defaults_to_zero() {
        let parsed: SequenceAudit = serde_json::from_str(r#"{"clips":[]}"#).unwrap();
        assert_eq!(parsed.frame_rate, 0.0);
        assert_eq!(parsed.total_duration_frames, 0);
        assert!(!parsed.has_frame_rate());
    }

    #[test]
    fn test_null_metadata_reads_as_zero() {
        let parsed: SequenceAudit =
            serde_json::from_str(r#"{"frameRate":24,"totalDurationFrames":null,"clips":[]}"#)
                .unwrap();
        assert_eq!(parsed.total_duration_frames, 0);
        assert!(parsed.has_frame_rate());

        let parsed: SequenceAudit =
            serde_json::from_str(r#"{"frameRate":null,"totalDurationFrames":1440,"clips":[]}"#)
                .unwrap();
        assert_eq!(parsed.frame_rate, 0.0);
        assert_eq!(parsed.total_duration_frames, 1440);
    }

    #[test]
    fn test_wrong_metadata_type_is_rejected() {
        let raw = r#"{"frameRate":"fast","clips":[]}"#;
        assert!(serde_json::from_str::<SequenceAudit>(raw).is_err());
    }

    #[test]
    fn test_clips_are_required() {
        assert!(serde_json::from_str::<SequenceAudit>(r#"{"frameRate":24}"#).is_err());
    }

    #[test]
    fn test_labelled_clips_skips_blank_records() {
        let mut audit = sample();
        audit.clips.push(ClipRecord {
            text: Some(String::new()),
            name: None,
            start_frame: 1400,
            end_frame: 1410,
            duration_frames: 10,
            track_index: 2,
        });
        assert_eq!(audit.labelled_clips().count(), 2);
    }

    #[test]
    fn test_is_sorted() {
        let mut audit = sample();
        assert!(audit.is_sorted());
        audit.clips.reverse();
        assert!(!audit.is_sorted());
    }

    #[test]
    fn test_usable_frame_rate() {
        assert_eq!(usable_frame_rate(24.0), Some(24.0));
        assert_eq!(usable_frame_rate(0.0), None);
        assert_eq!(usable_frame_rate(f64::NAN), None);
        assert_eq!(usable_frame_rate(f64::INFINITY), None);
    }
}
