//! Attribute construction error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AttributeError {
    #[error("attribute {kind} expects a {expected} payload, got {found}")]
    TypeMismatch {
        kind: String,
        expected: String,
        found: String,
    },

    #[error("code must be a positive value, got {code}")]
    NonPositiveCode { code: i64 },
}
