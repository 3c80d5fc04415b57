//! Narrative acts: named frame ranges used to group a report.
//!
//! Ranges are half-open, `[start, end)`.

use serde::{Deserialize, Serialize};

use crate::clip::FrameNumber;

/// A named half-open frame range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
    /// Section heading used in reports.
    pub name: String,
    /// First frame of the act.
    pub start: FrameNumber,
    /// First frame after the act.
    pub end: FrameNumber,
}

impl Act {
    pub fn new(name: impl Into<String>, start: FrameNumber, end: FrameNumber) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Whether `frame` falls inside `[start, end)`.
    pub fn contains(&self, frame: FrameNumber) -> bool {
        frame >= self.start && frame < self.end
    }

    /// Fixed act length in frames.
    pub fn duration_frames(&self) -> FrameNumber {
        self.end.saturating_sub(self.start)
    }
}

/// Ordered, non-empty list of acts.
///
/// Validated on construction and on deserialization, so a table loaded
/// from config always has a last act to fall back on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Act>", into = "Vec<Act>")]
pub struct ActTable {
    acts: Vec<Act>,
}

/// Errors raised when building an act table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActTableError {
    #[error("act table must contain at least one act")]
    Empty,

    #[error("act {name:?} ends at frame {end} before it starts at frame {start}")]
    Inverted {
        name: String,
        start: FrameNumber,
        end: FrameNumber,
    },
}

impl ActTable {
    /// Build a table from an ordered list of acts.
    pub fn new(acts: Vec<Act>) -> Result<Self, ActTableError> {
        if acts.is_empty() {
            return Err(ActTableError::Empty);
        }
        if let Some(bad) = acts.iter().find(|a| a.end < a.start) {
            return Err(ActTableError::Inverted {
                name: bad.name.clone(),
                start: bad.start,
                end: bad.end,
            });
        }
        Ok(Self { acts })
    }

    /// The four-act structure of the original cut.
    pub fn cybernetic_list() -> Self {
        Self {
            acts: vec![
                Act::new("THE RACE", 0, 449),
                Act::new("REJECTION", 449, 606),
                Act::new("RESCUE", 606, 1284),
                Act::new("THE HERO", 1284, 1440),
            ],
        }
    }

    pub fn acts(&self) -> &[Act] {
        &self.acts
    }

    pub fn len(&self) -> usize {
        self.acts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acts.is_empty()
    }

    /// Index of the act a clip starting at `start_frame` belongs to.
    ///
    /// The first act containing the frame wins. Frames outside every range
    /// (past the end, or negative) fall back to the last act.
    pub fn classify(&self, start_frame: FrameNumber) -> usize {
        self.acts
            .iter()
            .position(|act| act.contains(start_frame))
            .unwrap_or(self.acts.len() - 1)
    }

    /// Whether `start_frame` is covered by some act rather than the
    /// last-act fallback.
    pub fn covers(&self, start_frame: FrameNumber) -> bool {
        self.acts.iter().any(|act| act.contains(start_frame))
    }
}

impl Default for ActTable {
    fn default() -> Self {
        Self::cybernetic_list()
    }
}

impl TryFrom<Vec<Act>> for ActTable {
    type Error = ActTableError;

    fn try_from(acts: Vec<Act>) -> Result<Self, Self::Error> {
        Self::new(acts)
    }
}

impl From<ActTable> for Vec<Act> {
    fn from(table: ActTable) -> Self {
        table.acts
    }
}
