//! Host capability traits.
//!
//! These mirror the parts of an editing application's scripting surface
//! the extractor needs: the active sequence, its tracks and clips, and the
//! optional parametric-graphics component a clip may carry. Every accessor
//! can fail; failures outside the graphics lookup abort the extraction.

use serde::{Deserialize, Serialize};

/// Error raised by a host accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<HostError> for cutlist_common::CutlistError {
    fn from(err: HostError) -> Self {
        Self::host_script(err.message)
    }
}

pub type HostResult<T> = Result<T, HostError>;

/// The editing application itself.
pub trait HostApp {
    /// The sequence open in the timeline, if any.
    fn active_sequence(&self) -> HostResult<Option<&dyn HostSequence>>;
}

/// A timeline of tracks.
pub trait HostSequence {
    /// Raw ticks-per-frame value, as the host reports it.
    fn timebase(&self) -> HostResult<Option<String>>;

    /// Raw end position in ticks.
    fn end_ticks(&self) -> HostResult<String>;

    fn track_count(&self) -> HostResult<usize>;

    fn track(&self, index: usize) -> HostResult<&dyn HostTrack>;
}

/// An ordered lane of clips.
pub trait HostTrack {
    fn clip_count(&self) -> HostResult<usize>;

    fn clip(&self, index: usize) -> HostResult<&dyn HostClip>;
}

/// A single element placed on a track.
pub trait HostClip {
    /// Clip name as shown in the timeline.
    fn name(&self) -> HostResult<Option<String>>;

    /// Start position in seconds.
    fn start_seconds(&self) -> HostResult<f64>;

    /// End position in seconds.
    fn end_seconds(&self) -> HostResult<f64>;

    /// Access to the clip's parametric-graphics component.
    fn graphics_component(&self) -> HostResult<GraphicsCapability<'_>> {
        Ok(GraphicsCapability::Unsupported)
    }
}

/// Whether a clip can expose a parametric-graphics component.
#[derive(Clone, Copy)]
pub enum GraphicsCapability<'a> {
    /// The host has no graphics-component accessor for this clip.
    Unsupported,
    /// The accessor exists but returned nothing usable.
    Empty,
    /// A component with enumerable properties.
    Available(&'a dyn GraphicsComponent),
}

impl std::fmt::Debug for GraphicsCapability<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => f.write_str("Unsupported"),
            Self::Empty => f.write_str("Empty"),
            Self::Available(_) => f.write_str("Available(..)"),
        }
    }
}

/// A motion-graphics template instance with named parameters.
pub trait GraphicsComponent {
    fn property_count(&self) -> HostResult<usize>;

    /// Whether [`GraphicsComponent::param_by_display_name`] is backed by the
    /// host. When it is not, only the property scan runs.
    fn supports_named_lookup(&self) -> bool {
        true
    }

    /// Exact display-name lookup.
    fn param_by_display_name(&self, name: &str) -> HostResult<Option<&dyn GraphicsParam>>;

    /// Property by position. `None` for slots without a readable value.
    fn property(&self, index: usize) -> HostResult<Option<&dyn GraphicsParam>>;
}

/// One adjustable parameter of a graphics component.
pub trait GraphicsParam {
    fn display_name(&self) -> HostResult<Option<String>>;

    fn value(&self) -> HostResult<Option<ParamValue>>;
}

/// A scalar value read from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// String form as the host's scripting runtime would print it.
    pub fn to_host_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_host_number(*n),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

fn format_host_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}
