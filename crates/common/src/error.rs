//! Error types shared across Cutlist crates.

use std::path::PathBuf;

use cutlist_audit_model::{ActTableError, AuditFailure, FailureKind, PayloadError};

/// Top-level error type for Cutlist operations.
#[derive(Debug, thiserror::Error)]
pub enum CutlistError {
    #[error("No active sequence found. Please open a sequence in the timeline.")]
    NoActiveSequence,

    #[error("Host script error: {message}")]
    HostScript { message: String },

    #[error("Malformed audit payload: {message}")]
    MalformedPayload { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using CutlistError.
pub type CutlistResult<T> = Result<T, CutlistError>;

impl CutlistError {
    pub fn host_script(msg: impl Into<String>) -> Self {
        Self::HostScript {
            message: msg.into(),
        }
    }

    pub fn malformed_payload(msg: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wire form of an extraction failure, if this error is one.
    pub fn to_failure(&self) -> Option<AuditFailure> {
        match self {
            Self::NoActiveSequence => Some(AuditFailure::no_active_sequence()),
            Self::HostScript { message } => Some(AuditFailure::host_script(message.clone())),
            _ => None,
        }
    }
}

impl From<AuditFailure> for CutlistError {
    fn from(failure: AuditFailure) -> Self {
        match failure.kind {
            FailureKind::NoActiveSequence => Self::NoActiveSequence,
            FailureKind::HostScriptError => Self::HostScript {
                message: failure.error,
            },
        }
    }
}

impl From<PayloadError> for CutlistError {
    fn from(err: PayloadError) -> Self {
        Self::malformed_payload(err.to_string())
    }
}

impl From<ActTableError> for CutlistError {
    fn from(err: ActTableError) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kinds_map_to_variants() {
        let err = CutlistError::from(AuditFailure::no_active_sequence());
        assert!(matches!(err, CutlistError::NoActiveSequence));

        let err = CutlistError::from(AuditFailure::host_script("clip 3 is locked"));
        assert_eq!(err.to_string(), "Host script error: clip 3 is locked");
    }

    #[test]
    fn test_to_failure_roundtrips_extraction_errors() {
        let failure = CutlistError::host_script("boom").to_failure().unwrap();
        assert_eq!(failure.kind, FailureKind::HostScriptError);
        assert_eq!(failure.error, "boom");

        assert!(CutlistError::config("bad").to_failure().is_none());
    }

    #[test]
    fn test_payload_error_becomes_malformed() {
        let err: CutlistError = cutlist_audit_model::AuditPayload::decode("nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, CutlistError::MalformedPayload { .. }));
    }
}
