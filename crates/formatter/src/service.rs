//! The formatter service interface and its implementations

use std::error::Error as StdError;
use std::fmt;

use errfmt_config::FormatterConfig;
use errfmt_errors::Error;
use errfmt_valued::{get_code, validate_code, AttributeValue, BoxError, ValuedError};
use tracing::trace;

use crate::formatted;

/// Uniform entry points for annotating errors at a boundary.
///
/// # Panics
///
/// `error_with_code` panics when `code` is not positive in every
/// implementation: passing such a code is a bug at the call site.
pub trait ErrorFormatter {
    /// Code of the nearest valued layer, or [`errfmt_valued::CODE_MISSING`].
    fn error_get_code(&self, err: &(dyn StdError + 'static)) -> i64 {
        get_code(err)
    }

    fn error_with_code<E: Into<BoxError>>(&self, err: E, code: i64) -> BoxError;

    /// Hand `err` back unchanged.
    fn error_no_wrap<E: Into<BoxError>>(&self, err: E) -> BoxError {
        err.into()
    }

    fn error_only<E: Into<BoxError>>(&self, err: E, details: &[&str]) -> BoxError;

    fn error<E: Into<BoxError>>(&self, err: E, details: &[&str]) -> BoxError;

    fn errorf<E: Into<BoxError>>(&self, err: E, args: fmt::Arguments<'_>) -> BoxError;

    fn new_error(&self, details: &[&str]) -> BoxError;

    fn new_errorf(&self, args: fmt::Arguments<'_>) -> BoxError;
}

fn positive(code: i64) -> i64 {
    match validate_code(code) {
        Ok(code) => code,
        Err(err) => panic!("errfmt: {err}"),
    }
}

/// Formatter without attributes: plain string wrapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ErrorFormatter for PlainFormatter {
    fn error_with_code<E: Into<BoxError>>(&self, err: E, code: i64) -> BoxError {
        Box::new(ValuedError::wrap(err, [AttributeValue::code(positive(code))]))
    }

    fn error_only<E: Into<BoxError>>(&self, err: E, details: &[&str]) -> BoxError {
        formatted::error_only(err, details)
    }

    fn error<E: Into<BoxError>>(&self, err: E, details: &[&str]) -> BoxError {
        formatted::error(err, details)
    }

    fn errorf<E: Into<BoxError>>(&self, err: E, args: fmt::Arguments<'_>) -> BoxError {
        formatted::errorf(err, args)
    }

    fn new_error(&self, details: &[&str]) -> BoxError {
        Box::new(formatted::new_error(details))
    }

    fn new_errorf(&self, args: fmt::Arguments<'_>) -> BoxError {
        Box::new(formatted::new_errorf(args))
    }
}

/// Formatter that prefixes every error with one scope.
///
/// `error`, `errorf` and the constructors append the caller location.
#[derive(Clone, Debug)]
pub struct ScopedFormatter {
    scope: String,
}

impl ScopedFormatter {
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl ErrorFormatter for ScopedFormatter {
    fn error_with_code<E: Into<BoxError>>(&self, err: E, code: i64) -> BoxError {
        Box::new(ValuedError::wrap(
            err,
            [
                AttributeValue::code(positive(code)),
                AttributeValue::scope(self.scope.as_str()),
            ],
        ))
    }

    fn error_only<E: Into<BoxError>>(&self, err: E, details: &[&str]) -> BoxError {
        trace!(scope = %self.scope, "wrapping error");
        Box::new(formatted::scoped_error_only(err, &self.scope, details))
    }

    #[track_caller]
    fn error<E: Into<BoxError>>(&self, err: E, details: &[&str]) -> BoxError {
        trace!(scope = %self.scope, "wrapping error");
        Box::new(formatted::scoped_error(err, &self.scope, details))
    }

    #[track_caller]
    fn errorf<E: Into<BoxError>>(&self, err: E, args: fmt::Arguments<'_>) -> BoxError {
        trace!(scope = %self.scope, "wrapping error");
        Box::new(formatted::scoped_errorf(err, &self.scope, args))
    }

    #[track_caller]
    fn new_error(&self, details: &[&str]) -> BoxError {
        Box::new(formatted::new_scoped_error(&self.scope, details))
    }

    #[track_caller]
    fn new_errorf(&self, args: fmt::Arguments<'_>) -> BoxError {
        Box::new(formatted::new_scoped_errorf(&self.scope, args))
    }
}

/// Formatter that attaches a default attribute set to every error.
///
/// Defaults go first in each batch, so a detail or code passed to the call
/// replaces the default of the same kind.
#[derive(Clone, Debug, Default)]
pub struct ValuedFormatter {
    defaults: Vec<AttributeValue>,
}

impl ValuedFormatter {
    #[must_use]
    pub fn new(defaults: impl IntoIterator<Item = AttributeValue>) -> Self {
        Self {
            defaults: defaults.into_iter().collect(),
        }
    }

    /// Build a formatter from the `[formatter]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured attributes are invalid.
    pub fn from_config(config: &FormatterConfig) -> Result<Self, Error> {
        let defaults = config.attributes()?;
        trace!(count = defaults.len(), "valued formatter configured");
        Ok(Self { defaults })
    }

    #[must_use]
    pub fn defaults(&self) -> &[AttributeValue] {
        &self.defaults
    }

    fn batch(&self, value: AttributeValue) -> Vec<AttributeValue> {
        let mut batch = Vec::with_capacity(self.defaults.len() + 1);
        batch.extend_from_slice(&self.defaults);
        batch.push(value);
        batch
    }

    fn wrap<E: Into<BoxError>>(&self, err: E, value: AttributeValue) -> BoxError {
        trace!(kind = %value.kind(), "attaching attributes");
        Box::new(ValuedError::wrap(err, self.batch(value)))
    }
}

impl ErrorFormatter for ValuedFormatter {
    /// Attach only `code`; the default attribute set is left out.
    fn error_with_code<E: Into<BoxError>>(&self, err: E, code: i64) -> BoxError {
        Box::new(ValuedError::wrap(err, [AttributeValue::code(positive(code))]))
    }

    fn error_only<E: Into<BoxError>>(&self, err: E, details: &[&str]) -> BoxError {
        self.wrap(err, AttributeValue::details(details.iter().copied()))
    }

    fn error<E: Into<BoxError>>(&self, err: E, details: &[&str]) -> BoxError {
        self.error_only(err, details)
    }

    fn errorf<E: Into<BoxError>>(&self, err: E, args: fmt::Arguments<'_>) -> BoxError {
        self.wrap(err, AttributeValue::details([args.to_string()]))
    }

    fn new_error(&self, details: &[&str]) -> BoxError {
        Box::new(ValuedError::new(details.join(", "), self.defaults.iter().cloned()))
    }

    fn new_errorf(&self, args: fmt::Arguments<'_>) -> BoxError {
        Box::new(ValuedError::new(args.to_string(), self.defaults.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "code must be a positive value")]
    fn test_plain_rejects_zero_code() {
        let _ = PlainFormatter::new().error_with_code("boom", 0);
    }

    #[test]
    #[should_panic(expected = "code must be a positive value")]
    fn test_valued_rejects_negative_code() {
        let _ = ValuedFormatter::default().error_with_code("boom", -1);
    }

    #[test]
    fn test_no_wrap_is_identity() {
        let err = PlainFormatter::new().error_no_wrap(std::io::Error::other("boom"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_batch_puts_defaults_first() {
        let formatter = ValuedFormatter::new([AttributeValue::code(1), AttributeValue::scope("s")]);
        assert_eq!(
            formatter.batch(AttributeValue::code(2)),
            vec![
                AttributeValue::code(1),
                AttributeValue::scope("s"),
                AttributeValue::code(2),
            ]
        );
    }
}
