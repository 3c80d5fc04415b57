//! Clip text resolution.
//!
//! Graphics-template clips may carry their on-screen text in a parameter.
//! Native text clips only expose placeholder glyphs, so a value counts as
//! text only when it starts with a printable ASCII character. Everything
//! else falls back to the clip name.

use crate::host::{GraphicsCapability, GraphicsComponent, GraphicsParam, HostClip, HostResult};

/// Parameter names tried, in order, before scanning every property.
pub const TEXT_PARAM_NAMES: [&str; 6] = [
    "Source Text",
    "Text",
    "source text",
    "text",
    "Main Title",
    "Title",
];

/// Where a clip's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Exact match on one of [`TEXT_PARAM_NAMES`].
    NamedParam(&'static str),
    /// First property whose display name mentions text or title.
    ScannedParam(String),
    /// The clip's own name.
    ClipName,
}

/// Resolved text for a clip. `text` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedText {
    pub text: String,
    pub source: TextSource,
}

/// Trim whitespace, including byte-order marks and non-breaking spaces.
pub fn trim_host_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Whether an already-trimmed value starts with printable ASCII.
pub fn is_readable(s: &str) -> bool {
    s.chars().next().is_some_and(|c| (' '..='~').contains(&c))
}

/// Resolve the display text of `clip`.
///
/// `clip_name` is the already-trimmed clip name used as the fallback. Host
/// errors raised while probing the graphics component are logged and
/// swallowed.
pub fn resolve_clip_text(clip: &dyn HostClip, clip_name: &str) -> ResolvedText {
    match graphics_text(clip) {
        Ok(Some(resolved)) => resolved,
        Ok(None) => fallback(clip_name),
        Err(e) => {
            tracing::debug!(error = %e, clip = clip_name, "Graphics text lookup failed");
            fallback(clip_name)
        }
    }
}

fn fallback(clip_name: &str) -> ResolvedText {
    ResolvedText {
        text: trim_host_text(clip_name).to_string(),
        source: TextSource::ClipName,
    }
}

fn graphics_text(clip: &dyn HostClip) -> HostResult<Option<ResolvedText>> {
    let component = match clip.graphics_component()? {
        GraphicsCapability::Available(component) => component,
        GraphicsCapability::Unsupported | GraphicsCapability::Empty => return Ok(None),
    };

    if let Some(resolved) = named_param_text(component)? {
        return Ok(Some(resolved));
    }
    scanned_param_text(component)
}

fn named_param_text(component: &dyn GraphicsComponent) -> HostResult<Option<ResolvedText>> {
    if component.property_count()? == 0 || !component.supports_named_lookup() {
        return Ok(None);
    }
    for name in TEXT_PARAM_NAMES {
        if let Some(param) = component.param_by_display_name(name)? {
            if let Some(text) = readable_value(param)? {
                return Ok(Some(ResolvedText {
                    text,
                    source: TextSource::NamedParam(name),
                }));
            }
        }
    }
    Ok(None)
}

fn scanned_param_text(component: &dyn GraphicsComponent) -> HostResult<Option<ResolvedText>> {
    for index in 0..component.property_count()? {
        let Some(param) = component.property(index)? else {
            continue;
        };
        let display_name = param.display_name()?.unwrap_or_default();
        let lowered = display_name.to_lowercase();
        if !lowered.contains("text") && !lowered.contains("title") {
            continue;
        }
        if let Some(text) = readable_value(param)? {
            return Ok(Some(ResolvedText {
                text,
                source: TextSource::ScannedParam(display_name),
            }));
        }
    }
    Ok(None)
}

fn readable_value(param: &dyn GraphicsParam) -> HostResult<Option<String>> {
    Ok(param.value()?.and_then(|value| {
        let raw = value.to_host_string();
        let trimmed = trim_host_text(&raw);
        is_readable(trimmed).then(|| trimmed.to_string())
    }))
}
