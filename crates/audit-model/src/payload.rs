//! The JSON envelope exchanged between the extractor and the reporter.
//!
//! A payload is either a [`SequenceAudit`] or an [`AuditFailure`] naming
//! which kind of failure stopped the extraction. Older producers signalled
//! failure with a bare string starting with `Error:` or with an `{"error"}`
//! object that has no `kind`; both still decode.

use serde::{Deserialize, Serialize};

use crate::audit::SequenceAudit;

/// Prefix used by legacy producers to mark a failure string.
pub const LEGACY_ERROR_PREFIX: &str = "Error:";

/// Longest slice of a bad payload quoted back in error messages.
const EXCERPT_LIMIT: usize = 120;

/// Which stage of extraction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No sequence was open in the host.
    NoActiveSequence,
    /// The host raised an error while the timeline was being walked.
    #[default]
    HostScriptError,
}

/// A failed extraction as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFailure {
    /// Failure category. Legacy payloads omit it.
    #[serde(default)]
    pub kind: FailureKind,

    /// Human-readable cause.
    pub error: String,
}

impl AuditFailure {
    pub fn new(kind: FailureKind, error: impl Into<String>) -> Self {
        Self {
            kind,
            error: error.into(),
        }
    }

    pub fn no_active_sequence() -> Self {
        Self::new(
            FailureKind::NoActiveSequence,
            "No active sequence found. Please open a sequence in the timeline.",
        )
    }

    pub fn host_script(message: impl Into<String>) -> Self {
        Self::new(FailureKind::HostScriptError, message)
    }
}

impl std::fmt::Display for AuditFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

/// Result of one extraction, as serialized for the reporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuditPayload {
    Failure(AuditFailure),
    Audit(SequenceAudit),
}

/// Errors raised when a payload cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Could not parse audit payload: {message} (raw: {excerpt:?})")]
    Malformed { message: String, excerpt: String },
}

impl PayloadError {
    fn malformed(message: impl std::fmt::Display, raw: &str) -> Self {
        Self::Malformed {
            message: message.to_string(),
            excerpt: excerpt(raw),
        }
    }
}

impl AuditPayload {
    /// Serialize to a compact JSON string.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a payload produced by any extractor version.
    pub fn decode(raw: &str) -> Result<Self, PayloadError> {
        let trimmed = raw.trim();
        if let Some(rest) = trimmed.strip_prefix(LEGACY_ERROR_PREFIX) {
            return Ok(Self::Failure(AuditFailure::host_script(rest.trim())));
        }

        let value: serde_json::Value =
            serde_json::from_str(trimmed).map_err(|e| PayloadError::malformed(e, raw))?;

        let is_failure = value
            .as_object()
            .map(|obj| obj.contains_key("error"))
            .ok_or_else(|| PayloadError::malformed("expected a JSON object", raw))?;

        if is_failure {
            let mut failure: AuditFailure =
                serde_json::from_value(value).map_err(|e| PayloadError::malformed(e, raw))?;
            if let Some(rest) = failure.error.trim().strip_prefix(LEGACY_ERROR_PREFIX) {
                failure.error = rest.trim().to_string();
            }
            Ok(Self::Failure(failure))
        } else {
            serde_json::from_value(value)
                .map(Self::Audit)
                .map_err(|e| PayloadError::malformed(e, raw))
        }
    }

    /// Split into the success or failure side.
    pub fn into_result(self) -> Result<SequenceAudit, AuditFailure> {
        match self {
            Self::Audit(audit) => Ok(audit),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl From<Result<SequenceAudit, AuditFailure>> for AuditPayload {
    fn from(result: Result<SequenceAudit, AuditFailure>) -> Self {
        match result {
            Ok(audit) => Self::Audit(audit),
            Err(failure) => Self::Failure(failure),
        }
    }
}

fn excerpt(raw: &str) -> String {
    match raw.char_indices().nth(EXCERPT_LIMIT) {
        Some((cut, _)) => format!("{}...", &raw[..cut]),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::ClipRecord;

    #[test]
    fn test_decode_success_payload() {
        let raw = r#"{"frameRate":24,"totalDurationFrames":1440,"clips":[
            {"text":"Hero Enters","startFrame":1300,"endFrame":1340,"durationFrames":40,"trackIndex":1}
        ]}"#;
        let audit = AuditPayload::decode(raw).unwrap().into_result().unwrap();
        assert_eq!(audit.frame_rate, 24.0);
        assert_eq!(audit.total_duration_frames, 1440);
        assert_eq!(audit.clips.len(), 1);
        assert_eq!(audit.clips[0].label(), Some("Hero Enters"));
    }

    #[test]
    fn test_decode_null_total_duration() {
        let raw = r#"{"frameRate":24,"totalDurationFrames":null,"clips":[]}"#;
        let audit = AuditPayload::decode(raw).unwrap().into_result().unwrap();
        assert_eq!(audit.frame_rate, 24.0);
        assert_eq!(audit.total_duration_frames, 0);
    }

    #[test]
    fn test_decode_null_frame_rate() {
        let raw = r#"{"frameRate":null,"totalDurationFrames":1440,"clips":[]}"#;
        let audit = AuditPayload::decode(raw).unwrap().into_result().unwrap();
        assert_eq!(audit.frame_rate, 0.0);
        assert_eq!(audit.total_duration_frames, 1440);
    }

    #[test]
    fn test_decode_legacy_sentinel_string() {
        let raw = "Error: An ExtendScript error occurred: clip.start is undefined";
        let failure = AuditPayload::decode(raw).unwrap().into_result().unwrap_err();
        assert_eq!(failure.kind, FailureKind::HostScriptError);
        assert_eq!(
            failure.error,
            "An ExtendScript error occurred: clip.start is undefined"
        );
    }

    #[test]
    fn test_decode_legacy_error_object_without_kind() {
        let raw = r#"{"error":"Error: No active sequence found."}"#;
        let failure = AuditPayload::decode(raw).unwrap().into_result().unwrap_err();
        assert_eq!(failure.kind, FailureKind::HostScriptError);
        assert_eq!(failure.error, "No active sequence found.");
    }

    #[test]
    fn test_decode_tagged_failure() {
        let encoded = AuditPayload::Failure(AuditFailure::no_active_sequence())
            .encode()
            .unwrap();
        assert!(encoded.contains("\"kind\":\"no_active_sequence\""));

        let failure = AuditPayload::decode(&encoded)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::NoActiveSequence);
    }

    #[test]
    fn test_error_field_wins_over_clips() {
        let raw = r#"{"error":"boom","clips":[]}"#;
        assert!(matches!(
            AuditPayload::decode(raw).unwrap(),
            AuditPayload::Failure(_)
        ));
    }

    #[test]
    fn test_malformed_payloads() {
        for raw in ["", "not json", "[1,2,3]", "42", r#"{"frameRate":24}"#] {
            let err = AuditPayload::decode(raw).unwrap_err();
            assert!(matches!(err, PayloadError::Malformed { .. }), "{raw:?}");
        }
    }

    #[test]
    fn test_malformed_excerpt_is_truncated() {
        let raw = "x".repeat(500);
        let PayloadError::Malformed { excerpt, .. } = AuditPayload::decode(&raw).unwrap_err();
        assert!(excerpt.len() < 200);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_encode_success_is_plain_audit_object() {
        let audit = SequenceAudit::new(25.0, 100, vec![ClipRecord::new("a", "a", 0, 10, 1)]);
        let encoded = AuditPayload::from(Ok(audit.clone())).encode().unwrap();
        assert!(encoded.starts_with("{\"frameRate\":25.0"));
        assert_eq!(
            AuditPayload::decode(&encoded).unwrap(),
            AuditPayload::Audit(audit)
        );
    }
}
