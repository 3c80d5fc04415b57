//! Clip records emitted by the extractor.
//!
//! Field names follow the camelCase wire format of the audit payload.

use serde::{Deserialize, Serialize};

/// Frame number on the sequence timeline.
///
/// Signed so malformed payloads with negative starts can still be decoded
/// and reported.
pub type FrameNumber = i64;

/// A single timeline element with its resolved label and frame timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WireClip")]
pub struct ClipRecord {
    /// Resolved display text (graphics parameter or clip name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Raw clip name, trimmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// First frame covered by the clip.
    pub start_frame: FrameNumber,

    /// Frame at which the clip ends.
    pub end_frame: FrameNumber,

    /// `max(0, end_frame - start_frame)`.
    pub duration_frames: FrameNumber,

    /// 1-based index of the source track.
    pub track_index: u32,
}

/// Decoding shape for [`ClipRecord`]; everything but the frame bounds is
/// optional on the wire.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireClip {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    name: Option<String>,
    start_frame: FrameNumber,
    end_frame: FrameNumber,
    #[serde(default)]
    duration_frames: Option<FrameNumber>,
    #[serde(default)]
    track_index: u32,
}

impl From<WireClip> for ClipRecord {
    fn from(wire: WireClip) -> Self {
        Self {
            text: wire.text,
            name: wire.name,
            start_frame: wire.start_frame,
            end_frame: wire.end_frame,
            duration_frames: wire
                .duration_frames
                .map(|d| d.max(0))
                .unwrap_or_else(|| duration_between(wire.start_frame, wire.end_frame)),
            track_index: wire.track_index,
        }
    }
}

impl ClipRecord {
    /// Create a record, deriving the duration from the frame bounds.
    pub fn new(
        text: impl Into<String>,
        name: impl Into<String>,
        start_frame: FrameNumber,
        end_frame: FrameNumber,
        track_index: u32,
    ) -> Self {
        Self {
            text: Some(text.into()),
            name: Some(name.into()),
            start_frame,
            end_frame,
            duration_frames: duration_between(start_frame, end_frame),
            track_index,
        }
    }

    /// The label shown in reports: `text` if non-empty, else `name` if
    /// non-empty.
    pub fn label(&self) -> Option<&str> {
        [self.text.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }

    /// Whether this record carries anything worth reporting.
    pub fn has_label(&self) -> bool {
        self.label().is_some()
    }
}

/// Frame count between two bounds, never negative.
pub fn duration_between(start_frame: FrameNumber, end_frame: FrameNumber) -> FrameNumber {
    end_frame.saturating_sub(start_frame).max(0)
}

/// Sort clips ascending by start frame, keeping traversal order for ties.
pub fn sort_by_start(clips: &mut [ClipRecord]) {
    clips.sort_by_key(|c| c.start_frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_derives_duration() {
        let clip = ClipRecord::new("Hero Enters", "Graphic", 1300, 1340, 1);
        assert_eq!(clip.duration_frames, 40);
        assert_eq!(clip.track_index, 1);
    }

    #[test]
    fn test_inverted_bounds_clamp_to_zero() {
        let clip = ClipRecord::new("Backwards", "Backwards", 120, 100, 2);
        assert_eq!(clip.duration_frames, 0);
    }

    #[test]
    fn test_label_prefers_text_then_name() {
        let mut clip = ClipRecord::new("Title Card", "Graphic", 0, 10, 1);
        assert_eq!(clip.label(), Some("Title Card"));

        clip.text = Some(String::new());
        assert_eq!(clip.label(), Some("Graphic"));

        clip.text = None;
        clip.name = Some(String::new());
        assert_eq!(clip.label(), None);
        assert!(!clip.has_label());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let clip = ClipRecord::new("A", "B", 1, 5, 3);
        let json = serde_json::to_string(&clip).unwrap();
        assert!(json.contains("\"startFrame\":1"));
        assert!(json.contains("\"endFrame\":5"));
        assert!(json.contains("\"durationFrames\":4"));
        assert!(json.contains("\"trackIndex\":3"));
    }

    #[test]
    fn test_missing_label_fields_are_omitted() {
        let clip = ClipRecord {
            text: None,
            name: Some("Only name".to_string()),
            start_frame: 0,
            end_frame: 1,
            duration_frames: 1,
            track_index: 1,
        };
        let json = serde_json::to_string(&clip).unwrap();
        assert!(!json.contains("\"text\""));
        assert!(json.contains("\"name\":\"Only name\""));
    }

    #[test]
    fn test_missing_duration_is_derived_on_decode() {
        let raw = r#"{"text":"x","startFrame":10,"endFrame":25}"#;
        let clip: ClipRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(clip.duration_frames, 15);
        assert_eq!(clip.name, None);
        assert_eq!(clip.track_index, 0);
    }

    #[test]
    fn test_negative_wire_duration_is_clamped() {
        let raw = r#"{"text":"x","startFrame":10,"endFrame":5,"durationFrames":-5}"#;
        let clip: ClipRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(clip.duration_frames, 0);
    }

    #[test]
    fn test_frame_bounds_are_required() {
        assert!(serde_json::from_str::<ClipRecord>(r#"{"text":"x","startFrame":1}"#).is_err());
    }

    #[test]
    fn test_sort_by_start_is_stable() {
        let mut clips = vec![
            ClipRecord::new("late", "late", 50, 60, 1),
            ClipRecord::new("tie-a", "tie-a", 10, 20, 1),
            ClipRecord::new("tie-b", "tie-b", 10, 30, 2),
            ClipRecord::new("early", "early", 0, 5, 2),
        ];
        sort_by_start(&mut clips);
        let order: Vec<_> = clips.iter().filter_map(|c| c.label()).collect();
        assert_eq!(order, vec!["early", "tie-a", "tie-b", "late"]);
    }

    proptest! {
        #[test]
        fn duration_is_never_negative(start in -10_000i64..10_000, end in -10_000i64..10_000) {
            let clip = ClipRecord::new("p", "p", start, end, 1);
            prop_assert!(clip.duration_frames >= 0);
            prop_assert_eq!(clip.duration_frames, (end - start).max(0));
        }
    }
}
