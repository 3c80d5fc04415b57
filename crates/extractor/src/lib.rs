//! Cutlist Extractor
//!
//! Walks the active sequence of a host editing application and produces a
//! [`SequenceAudit`](cutlist_audit_model::SequenceAudit):
//! - **Time base:** Ticks-per-frame discovery with a 24 fps fallback
//! - **Text resolution:** Graphics-template parameters first, clip name last
//! - **Traversal:** Every clip of every track, sorted by start frame
//!
//! The host is reached only through the traits in [`host`]. A JSON-backed
//! [`MemoryHost`] ships for the CLI and for tests.

pub mod extract;
pub mod host;
pub mod memory;
pub mod text;
pub mod timebase;

pub use extract::{extract, extract_payload, extract_with_stats, ExtractionStats};
pub use host::*;
pub use memory::MemoryHost;
pub use timebase::TimeBase;
