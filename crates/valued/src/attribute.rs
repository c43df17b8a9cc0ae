//! Typed attribute values

use std::collections::HashSet;
use std::fmt;

use errfmt_errors::AttributeError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value reported by code lookups when no code is attached anywhere in the chain.
pub const CODE_MISSING: i64 = -1;

/// Kind of an attribute. The ordinal is stable and doubles as a bit index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttributeKind {
    Scope,
    Details,
    Code,
    PublicCode,
}

impl AttributeKind {
    pub const ALL: [Self; 4] = [Self::Scope, Self::Details, Self::Code, Self::PublicCode];

    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            Self::Scope => 0,
            Self::Details => 1,
            Self::Code => 2,
            Self::PublicCode => 3,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scope => "scope",
            Self::Details => "details",
            Self::Code => "code",
            Self::PublicCode => "public_code",
        }
    }

    fn payload_name(self) -> &'static str {
        match self {
            Self::Scope => Payload::TEXT,
            Self::Details => Payload::LIST,
            Self::Code | Self::PublicCode => Payload::INT,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untyped attribute payload, as it arrives from configuration or other
/// dynamic sources.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Payload {
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl Payload {
    const TEXT: &'static str = "text";
    const LIST: &'static str = "list";
    const INT: &'static str = "integer";

    fn name(&self) -> &'static str {
        match self {
            Self::Int(_) => Self::INT,
            Self::Text(_) => Self::TEXT,
            Self::List(_) => Self::LIST,
        }
    }
}

/// One attribute attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    Scope(String),
    Details(Vec<String>),
    Code(i64),
    PublicCode(i64),
}

impl AttributeValue {
    #[must_use]
    pub fn scope(scope: impl Into<String>) -> Self {
        Self::Scope(scope.into())
    }

    #[must_use]
    pub fn details<I, S>(details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Details(details.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn code(code: i64) -> Self {
        Self::Code(code)
    }

    #[must_use]
    pub fn public_code(code: i64) -> Self {
        Self::PublicCode(code)
    }

    /// Build a value from a kind and an untyped payload.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::TypeMismatch`] when the payload shape does
    /// not belong to `kind`.
    pub fn from_payload(kind: AttributeKind, payload: Payload) -> Result<Self, AttributeError> {
        match (kind, payload) {
            (AttributeKind::Scope, Payload::Text(scope)) => Ok(Self::Scope(scope)),
            (AttributeKind::Details, Payload::List(details)) => Ok(Self::Details(details)),
            (AttributeKind::Details, Payload::Text(detail)) => Ok(Self::Details(vec![detail])),
            (AttributeKind::Code, Payload::Int(code)) => Ok(Self::Code(code)),
            (AttributeKind::PublicCode, Payload::Int(code)) => Ok(Self::PublicCode(code)),
            (kind, payload) => Err(AttributeError::TypeMismatch {
                kind: kind.to_string(),
                expected: kind.payload_name().to_string(),
                found: payload.name().to_string(),
            }),
        }
    }

    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Scope(_) => AttributeKind::Scope,
            Self::Details(_) => AttributeKind::Details,
            Self::Code(_) => AttributeKind::Code,
            Self::PublicCode(_) => AttributeKind::PublicCode,
        }
    }
}

/// Concatenate `existing` and `incoming`, dropping repeats.
///
/// The first occurrence of each detail keeps its position. Neither input is
/// modified; the result is always a fresh vector.
#[must_use]
pub fn merge_details(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(existing.len() + incoming.len());
    existing
        .iter()
        .chain(incoming)
        .filter(|detail| seen.insert(*detail))
        .cloned()
        .collect()
}

/// Check that a code is usable as a classifier.
///
/// # Errors
///
/// Returns [`AttributeError::NonPositiveCode`] for zero or negative codes.
pub fn validate_code(code: i64) -> Result<i64, AttributeError> {
    if code > 0 {
        Ok(code)
    } else {
        Err(AttributeError::NonPositiveCode { code })
    }
}
