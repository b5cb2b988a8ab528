//! Engine error types.
//!
//! Every variant carries a stable machine code and an HTTP-equivalent status so
//! callers outside the process can branch on them without parsing messages.

use serde::Serialize;

use lca_core::errors::CoreError;
use lca_db::error::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Assessment id missing, non-numeric, or not positive.
    #[error("invalid assessment identifier: {0}")]
    InvalidIdentifier(String),

    #[error("assessment {id} not found")]
    AssessmentNotFound { id: i64 },

    /// No benchmark exists for the assessment's metal.
    #[error("unsupported metal type '{metal}'")]
    UnsupportedMetalType { metal: String },

    /// The records present are not enough to compute impacts.
    #[error("insufficient data: {reason}")]
    InsufficientData { reason: String },

    /// Any persistence or unexpected fault.
    #[error("internal failure: {0}")]
    InternalFailure(String),
}

impl EngineError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            Self::AssessmentNotFound { .. } => "ASSESSMENT_NOT_FOUND",
            Self::UnsupportedMetalType { .. } => "UNSUPPORTED_METAL_TYPE",
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::InternalFailure(_) => "INTERNAL_FAILURE",
        }
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::InvalidIdentifier(_) => 400,
            Self::AssessmentNotFound { .. } => 404,
            Self::UnsupportedMetalType { .. } | Self::InsufficientData { .. } => 422,
            Self::InternalFailure(_) => 500,
        }
    }

    /// Wire shape of this error.
    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code(),
            status: self.status(),
            message: self.to_string(),
        }
    }

    /// Map a failed assessment lookup: a missing row is not-found, anything
    /// else is internal.
    #[must_use]
    pub fn from_lookup(id: i64, error: DatabaseError) -> Self {
        match error {
            DatabaseError::NoResult => Self::AssessmentNotFound { id },
            other => other.into(),
        }
    }
}

impl From<DatabaseError> for EngineError {
    fn from(error: DatabaseError) -> Self {
        Self::InternalFailure(error.to_string())
    }
}

impl From<CoreError> for EngineError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidIdentifier(reason) => Self::InvalidIdentifier(reason),
            CoreError::Validation(reason) => Self::InternalFailure(reason),
        }
    }
}

/// `{code, status, message}` as printed by the CLI.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub code: &'static str,
    pub status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_and_statuses() {
        let cases = [
            (EngineError::InvalidIdentifier("x".into()), "INVALID_IDENTIFIER", 400),
            (EngineError::AssessmentNotFound { id: 7 }, "ASSESSMENT_NOT_FOUND", 404),
            (
                EngineError::UnsupportedMetalType { metal: "titanium".into() },
                "UNSUPPORTED_METAL_TYPE",
                422,
            ),
            (
                EngineError::InsufficientData { reason: "no materials".into() },
                "INSUFFICIENT_DATA",
                422,
            ),
            (EngineError::InternalFailure("boom".into()), "INTERNAL_FAILURE", 500),
        ];
        for (error, code, status) in cases {
            assert_eq!(error.code(), code);
            assert_eq!(error.status(), status);
        }
    }

    #[test]
    fn lookup_mapping() {
        assert!(matches!(
            EngineError::from_lookup(3, DatabaseError::NoResult),
            EngineError::AssessmentNotFound { id: 3 }
        ));
        assert!(matches!(
            EngineError::from_lookup(3, DatabaseError::Query("bad".into())),
            EngineError::InternalFailure(_)
        ));
    }

    #[test]
    fn payload_carries_full_message() {
        let payload = EngineError::UnsupportedMetalType {
            metal: "titanium".into(),
        }
        .payload();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "code": "UNSUPPORTED_METAL_TYPE",
                "status": 422,
                "message": "unsupported metal type 'titanium'"
            })
        );
    }

    #[test]
    fn core_identifier_error_maps_through() {
        let error: EngineError = CoreError::InvalidIdentifier("abc".into()).into();
        assert_eq!(error.code(), "INVALID_IDENTIFIER");
    }
}
