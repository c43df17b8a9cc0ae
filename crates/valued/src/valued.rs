//! The valued error and its lookups

use std::error::Error as StdError;
use std::fmt;
use std::iter;
use std::sync::Arc;

use thiserror::Error;

use crate::attribute::{AttributeKind, AttributeValue, CODE_MISSING};
use crate::attributes::{Attributes, SettledSet};
use crate::merge::{plan, Rewrap};
use crate::render::render;

/// Owned, thread-safe error as accepted by the attach entry points.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Shared handle to a wrapped cause.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Leaf cause for errors built from a message alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MessageError(String);

impl MessageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// An error annotated with scope, details and codes.
///
/// The rendered message is what `Display` prints; `source()` returns the
/// wrapped cause, which is either the original error or an earlier valued
/// layer.
#[derive(Clone, Debug)]
pub struct ValuedError {
    cause: Cause,
    attributes: Attributes,
    message: String,
}

impl ValuedError {
    /// Build an error from a message that has no cause of its own.
    #[must_use]
    pub fn new<I>(message: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = AttributeValue>,
    {
        Self::construct(Arc::new(MessageError::new(message)), values.into_iter().collect())
    }

    /// Attach `values` to `err`.
    ///
    /// A valued error, or the nearest valued layer inside a foreign one, is
    /// rewrapped according to [`plan`]; the foreign wrapper is dropped. An
    /// error with no valued layer becomes the cause of a fresh valued error.
    #[must_use]
    pub fn wrap<E, I>(err: E, values: I) -> Self
    where
        E: Into<BoxError>,
        I: IntoIterator<Item = AttributeValue>,
    {
        let err: BoxError = err.into();
        match err.downcast::<Self>() {
            Ok(valued) => (*valued).attach_all(values),
            Err(other) => match find_valued(&*other) {
                Some(inner) => inner.clone().attach_all(values),
                None => Self::construct(Cause::from(other), values.into_iter().collect()),
            },
        }
    }

    fn construct(cause: Cause, attributes: Attributes) -> Self {
        let message = render(
            &cause.to_string(),
            attributes.scope(),
            attributes.details(),
        );
        Self {
            cause,
            attributes,
            message,
        }
    }

    #[must_use]
    pub fn attach(self, value: AttributeValue) -> Self {
        self.attach_all(iter::once(value))
    }

    #[must_use]
    pub fn attach_all<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = AttributeValue>,
    {
        let (attributes, rewrap) = plan(&self.attributes, values.into_iter().collect());
        match rewrap {
            Rewrap::Keep => Self { attributes, ..self },
            Rewrap::Rerender => Self::construct(self.cause, attributes),
            Rewrap::Nest => Self::construct(Arc::new(self), attributes),
        }
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn settled(&self) -> SettledSet {
        self.attributes.settled()
    }

    #[must_use]
    pub fn has(&self, kind: AttributeKind) -> bool {
        self.attributes.has(kind)
    }

    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.attributes.scope()
    }

    #[must_use]
    pub fn details(&self) -> &[String] {
        self.attributes.details()
    }

    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.attributes.code()
    }

    #[must_use]
    pub fn public_code(&self) -> Option<i64> {
        self.attributes.public_code()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error one level down.
    #[must_use]
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    #[must_use]
    pub fn into_cause(self) -> Cause {
        self.cause
    }
}

impl fmt::Display for ValuedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ValuedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let cause: &(dyn StdError + 'static) = self.cause.as_ref();
        Some(cause)
    }
}

/// Attach one value; `None` passes through untouched.
#[must_use]
pub fn attach_attribute<E>(err: Option<E>, value: AttributeValue) -> Option<ValuedError>
where
    E: Into<BoxError>,
{
    attach_attributes(err, iter::once(value))
}

/// Attach a batch of values; `None` passes through untouched.
#[must_use]
pub fn attach_attributes<E, I>(err: Option<E>, values: I) -> Option<ValuedError>
where
    E: Into<BoxError>,
    I: IntoIterator<Item = AttributeValue>,
{
    err.map(|err| ValuedError::wrap(err, values))
}

/// Iterate `err` and every error below it.
#[must_use]
pub fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    iter::successors(Some(err), |current| (*current).source())
}

/// First valued layer in the chain of `err`.
#[must_use]
pub fn find_valued<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ValuedError> {
    chain(err).find_map(|current| current.downcast_ref::<ValuedError>())
}

/// Code of the nearest valued layer that carries one, or [`CODE_MISSING`].
#[must_use]
pub fn get_code(err: &(dyn StdError + 'static)) -> i64 {
    chain(err)
        .filter_map(|current| current.downcast_ref::<ValuedError>())
        .find_map(ValuedError::code)
        .unwrap_or(CODE_MISSING)
}

/// Public code of the nearest valued layer that carries one, or [`CODE_MISSING`].
#[must_use]
pub fn get_public_code(err: &(dyn StdError + 'static)) -> i64 {
    chain(err)
        .filter_map(|current| current.downcast_ref::<ValuedError>())
        .find_map(ValuedError::public_code)
        .unwrap_or(CODE_MISSING)
}

/// Scope of the nearest valued layer that carries one.
#[must_use]
pub fn get_scope<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a str> {
    chain(err)
        .filter_map(|current| current.downcast_ref::<ValuedError>())
        .find_map(ValuedError::scope)
}
