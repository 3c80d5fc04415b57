//! Markdown cut-list rendering.

use cutlist_audit_model::{usable_frame_rate, ActTable, FrameNumber, SequenceAudit};
use cutlist_common::config::ReportDefaults;

use crate::buckets::bucket_clips;

/// Closing note explaining why some clips are labelled by name.
pub const GRAPHICS_NOTE: &str = "### Important Note About Graphics Clips\n\n\
Native Premiere Pro Graphics/Text clips **do not expose their actual text content** through the scripting API. \
The visible text you see in Premiere cannot be accessed programmatically.\n\n\
**Solution:** Rename your Graphics clips in the timeline with descriptive names (e.g., \"Title: The Race Begins\"). \
This script will use the clip name as the text value.\n\n\
**Alternative:** For programmatic text access, use MOGRTs (Motion Graphics Templates) with **Source Text** parameters exposed, \
instead of native Graphics clips.\n";

const RULE: &str = "---\n\n";

/// Layout settings for a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Top-level heading.
    pub title: String,
    /// Acts to group clips into.
    pub acts: ActTable,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportDefaults::default().into()
    }
}

impl From<ReportDefaults> for ReportOptions {
    fn from(defaults: ReportDefaults) -> Self {
        Self {
            title: defaults.title,
            acts: defaults.acts,
        }
    }
}

/// Render with the default title and act table.
pub fn render_default(audit: &SequenceAudit) -> String {
    render(audit, &ReportOptions::default())
}

/// Render an audit as a Markdown cut list.
///
/// Sections, in order: title, one section per non-empty act, totals, and
/// the graphics-clip note.
pub fn render(audit: &SequenceAudit, options: &ReportOptions) -> String {
    let frame_rate = audit.frame_rate;
    if !audit.has_frame_rate() {
        tracing::warn!(frame_rate, "Audit has no usable frame rate, seconds render as zero");
    }
    let buckets = bucket_clips(&audit.clips, &options.acts);
    let clip_count: usize = buckets.iter().map(|b| b.clips.len()).sum();

    let mut md = format!("# {}\n\n", options.title);

    for bucket in buckets.iter().filter(|b| !b.clips.is_empty()) {
        let act = bucket.act;
        let act_frames = act.duration_frames();
        md.push_str(RULE);
        md.push_str(&format!("## {}\n\n", act.name));
        md.push_str(&format!("- **Start:** Frame {}\n", act.start));
        md.push_str(&format!("- **End:** Frame {}\n", act.end));
        md.push_str(&format!(
            "- **Duration:** {act_frames} frames ({})\n\n",
            format_seconds(act_frames, frame_rate)
        ));

        for entry in &bucket.clips {
            let clip = entry.clip;
            let label = escape_markdown(clip.label().unwrap_or_default());
            md.push_str(&format!("**{}. {label}**\n", entry.number));
            md.push_str(&format!("  - **Start:** Frame {}\n", clip.start_frame));
            md.push_str(&format!("  - **End:** Frame {}\n", clip.end_frame));
            md.push_str(&format!(
                "  - **Duration:** {} frames ({})\n\n",
                clip.duration_frames,
                format_seconds(clip.duration_frames, frame_rate)
            ));
        }
    }

    md.push_str(RULE);
    md.push_str("## Totals\n");
    md.push_str(&format!("- **Clips found:** {clip_count}\n"));
    md.push_str(&format!(
        "- **Total duration:** {} frames ({}) at {} fps\n\n",
        audit.total_duration_frames,
        format_seconds(audit.total_duration_frames, frame_rate),
        to_fixed(usable_frame_rate(frame_rate).unwrap_or(0.0), 3)
    ));

    md.push_str(RULE);
    md.push_str(GRAPHICS_NOTE);

    tracing::debug!(clips = clip_count, bytes = md.len(), "Rendered cut list");
    md
}

/// Backslash-escape Markdown emphasis characters: `*`, `_`, `` ` ``, `~`.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '_' | '`' | '~') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Format a frame count as seconds with two decimals, e.g. `1.67 s`.
///
/// An unusable frame rate renders as `0.00 s`.
pub fn format_seconds(frames: FrameNumber, frame_rate: f64) -> String {
    match usable_frame_rate(frame_rate) {
        Some(rate) => format!("{} s", to_fixed(frames as f64 / rate, 2)),
        None => "0.00 s".to_string(),
    }
}

/// Enough fractional digits to hold the exact expansion of any `f64`.
const EXACT_DIGITS: usize = 1100;

/// Format `value` with `digits` decimals, rounding half away from zero on
/// the exact binary value: `0.125` becomes `0.13`, while `1.005` (stored
/// as `1.00499...`) becomes `1.00`.
///
/// `{:.N}` rounds exact ties to even, which would give `0.12`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&b| char::from(b)));
    }
    out
}
