//! Cutlist Reporter
//!
//! Turns a [`SequenceAudit`](cutlist_audit_model::SequenceAudit) into a
//! Markdown cut list:
//! - **Bucketing:** Clips grouped into acts by start frame
//! - **Numbering:** One running clip number across the whole report
//! - **Rendering:** Fixed section layout with frame and second durations
//!
//! This crate is pure computation: the same audit always renders to the
//! same bytes.

pub mod buckets;
pub mod markdown;

pub use buckets::{bucket_clips, ActBucket, NumberedClip};
pub use markdown::{
    escape_markdown, format_seconds, render, render_default, to_fixed, ReportOptions,
};
