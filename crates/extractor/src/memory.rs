//! In-memory host backed by a JSON timeline snapshot.
//!
//! ```json
//! {
//!   "active_sequence": {
//!     "timebase": "10584000000",
//!     "end": "15240960000000",
//!     "tracks": [
//!       { "clips": [
//!         { "name": "Graphic", "start_seconds": 0.0, "end_seconds": 2.0,
//!           "graphics": { "component": { "properties": [
//!             { "display_name": "Source Text", "value": "The Race" }
//!           ] } } }
//!       ] }
//!     ]
//!   }
//! }
//! ```
//!
//! `fault` fields make the matching accessor fail, which lets tests drive
//! the extractor's error paths.

use std::path::Path;

use cutlist_common::error::{CutlistError, CutlistResult};
use serde::{Deserialize, Serialize};

use crate::host::{
    GraphicsCapability, GraphicsComponent, GraphicsParam, HostApp, HostClip, HostError,
    HostResult, HostSequence, HostTrack, ParamValue,
};

/// A host application whose state is plain data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryHost {
    #[serde(default)]
    pub active_sequence: Option<MemorySequence>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySequence {
    /// Display name; informational only.
    #[serde(default)]
    pub name: String,

    /// Ticks per frame.
    #[serde(default)]
    pub timebase: Option<ParamValue>,

    /// End position in ticks.
    pub end: ParamValue,

    #[serde(default)]
    pub tracks: Vec<MemoryTrack>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryTrack {
    #[serde(default)]
    pub clips: Vec<MemoryClip>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryClip {
    #[serde(default)]
    pub name: Option<String>,

    pub start_seconds: f64,

    pub end_seconds: f64,

    #[serde(default)]
    pub graphics: MemoryGraphics,

    /// When set, reading the clip's timing fails with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

/// Graphics capability of a memory clip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryGraphics {
    #[default]
    Unsupported,
    Empty,
    Component(MemoryComponent),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryComponent {
    #[serde(default = "default_named_lookup")]
    pub named_lookup: bool,

    #[serde(default)]
    pub properties: Vec<MemoryParam>,

    /// When set, counting properties fails with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryParam {
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub value: Option<ParamValue>,

    /// When set, reading the value fails with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

fn default_named_lookup() -> bool {
    true
}

fn check_fault(fault: &Option<String>) -> HostResult<()> {
    match fault {
        Some(message) => Err(HostError::new(message.clone())),
        None => Ok(()),
    }
}

impl MemoryHost {
    /// A host with no open sequence.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_sequence(sequence: MemorySequence) -> Self {
        Self {
            active_sequence: Some(sequence),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a timeline snapshot from disk.
    pub fn load(path: impl AsRef<Path>) -> CutlistResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CutlistError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

impl MemorySequence {
    pub fn new(timebase: impl Into<ParamValue>, end_ticks: impl Into<ParamValue>) -> Self {
        Self {
            name: String::new(),
            timebase: Some(timebase.into()),
            end: end_ticks.into(),
            tracks: vec![],
        }
    }

    pub fn with_track(mut self, clips: Vec<MemoryClip>) -> Self {
        self.tracks.push(MemoryTrack { clips });
        self
    }
}

impl MemoryClip {
    pub fn new(name: impl Into<String>, start_seconds: f64, end_seconds: f64) -> Self {
        Self {
            name: Some(name.into()),
            start_seconds,
            end_seconds,
            graphics: MemoryGraphics::Unsupported,
            fault: None,
        }
    }

    pub fn with_component(mut self, component: MemoryComponent) -> Self {
        self.graphics = MemoryGraphics::Component(component);
        self
    }

    pub fn with_empty_graphics(mut self) -> Self {
        self.graphics = MemoryGraphics::Empty;
        self
    }

    pub fn with_fault(mut self, message: impl Into<String>) -> Self {
        self.fault = Some(message.into());
        self
    }
}

impl MemoryComponent {
    pub fn new(properties: Vec<MemoryParam>) -> Self {
        Self {
            named_lookup: true,
            properties,
            fault: None,
        }
    }
}

impl MemoryParam {
    pub fn new(display_name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            value: Some(value.into()),
            fault: None,
        }
    }

    pub fn with_fault(mut self, message: impl Into<String>) -> Self {
        self.fault = Some(message.into());
        self
    }
}

impl HostApp for MemoryHost {
    fn active_sequence(&self) -> HostResult<Option<&dyn HostSequence>> {
        Ok(self
            .active_sequence
            .as_ref()
            .map(|s| s as &dyn HostSequence))
    }
}

impl HostSequence for MemorySequence {
    fn timebase(&self) -> HostResult<Option<String>> {
        Ok(self.timebase.as_ref().map(ParamValue::to_host_string))
    }

    fn end_ticks(&self) -> HostResult<String> {
        Ok(self.end.to_host_string())
    }

    fn track_count(&self) -> HostResult<usize> {
        Ok(self.tracks.len())
    }

    fn track(&self, index: usize) -> HostResult<&dyn HostTrack> {
        self.tracks
            .get(index)
            .map(|t| t as &dyn HostTrack)
            .ok_or_else(|| HostError::new(format!("track {index} out of range")))
    }
}

impl HostTrack for MemoryTrack {
    fn clip_count(&self) -> HostResult<usize> {
        Ok(self.clips.len())
    }

    fn clip(&self, index: usize) -> HostResult<&dyn HostClip> {
        self.clips
            .get(index)
            .map(|c| c as &dyn HostClip)
            .ok_or_else(|| HostError::new(format!("clip {index} out of range")))
    }
}

impl HostClip for MemoryClip {
    fn name(&self) -> HostResult<Option<String>> {
        Ok(self.name.clone())
    }

    fn start_seconds(&self) -> HostResult<f64> {
        check_fault(&self.fault)?;
        Ok(self.start_seconds)
    }

    fn end_seconds(&self) -> HostResult<f64> {
        check_fault(&self.fault)?;
        Ok(self.end_seconds)
    }

    fn graphics_component(&self) -> HostResult<GraphicsCapability<'_>> {
        Ok(match &self.graphics {
            MemoryGraphics::Unsupported => GraphicsCapability::Unsupported,
            MemoryGraphics::Empty => GraphicsCapability::Empty,
            MemoryGraphics::Component(c) => GraphicsCapability::Available(c),
        })
    }
}

impl GraphicsComponent for MemoryComponent {
    fn property_count(&self) -> HostResult<usize> {
        check_fault(&self.fault)?;
        Ok(self.properties.len())
    }

    fn supports_named_lookup(&self) -> bool {
        self.named_lookup
    }

    fn param_by_display_name(&self, name: &str) -> HostResult<Option<&dyn GraphicsParam>> {
        Ok(self
            .properties
            .iter()
            .find(|p| p.display_name.as_deref() == Some(name))
            .map(|p| p as &dyn GraphicsParam))
    }

    fn property(&self, index: usize) -> HostResult<Option<&dyn GraphicsParam>> {
        Ok(self.properties.get(index).map(|p| p as &dyn GraphicsParam))
    }
}

impl GraphicsParam for MemoryParam {
    fn display_name(&self) -> HostResult<Option<String>> {
        Ok(self.display_name.clone())
    }

    fn value(&self) -> HostResult<Option<ParamValue>> {
        check_fault(&self.fault)?;
        Ok(self.value.clone())
    }
}
