//! String-only wrap helpers
//!
//! These produce a [`FormattedError`]: a fixed message plus an optional
//! source. They carry no attributes and never merge; use the valued
//! formatter for rewrap-aware annotation.

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

use errfmt_valued::{render, BoxError, Cause};

/// An error whose message was rendered once from a cause and details.
#[derive(Clone, Debug)]
pub struct FormattedError {
    scope: Option<String>,
    message: String,
    source: Option<Cause>,
}

impl FormattedError {
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FormattedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for FormattedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let source: &(dyn StdError + 'static) = self.source.as_deref()?;
        Some(source)
    }
}

fn owned(details: &[&str]) -> Vec<String> {
    details.iter().map(ToString::to_string).collect()
}

#[track_caller]
fn caller() -> String {
    let location = Location::caller();
    format!("[{}:{}]", location.file(), location.line())
}

fn wrapped(err: BoxError, scope: Option<&str>, details: &[String]) -> FormattedError {
    let message = render(&err.to_string(), scope, details);
    FormattedError {
        scope: scope.map(ToString::to_string),
        message,
        source: Some(Cause::from(err)),
    }
}

fn standalone(scope: Option<&str>, details: &[String]) -> FormattedError {
    let joined = details.join(", ");
    let message = match scope {
        Some(scope) => format!("{scope}: {joined}"),
        None => joined,
    };
    FormattedError {
        scope: scope.map(ToString::to_string),
        message,
        source: None,
    }
}

/// `"{err} -> {details}"`; without details `err` is returned as is.
#[must_use]
pub fn error_only<E: Into<BoxError>>(err: E, details: &[&str]) -> BoxError {
    let err = err.into();
    if details.is_empty() {
        return err;
    }
    Box::new(wrapped(err, None, &owned(details)))
}

/// Same as [`error_only`].
#[must_use]
pub fn error<E: Into<BoxError>>(err: E, details: &[&str]) -> BoxError {
    error_only(err, details)
}

/// [`error_only`] with one formatted detail.
#[must_use]
pub fn errorf<E: Into<BoxError>>(err: E, args: fmt::Arguments<'_>) -> BoxError {
    error_only(err, &[args.to_string().as_str()])
}

/// A new error whose message is `details` joined by `", "`.
#[must_use]
pub fn new_error(details: &[&str]) -> FormattedError {
    standalone(None, &owned(details))
}

#[must_use]
pub fn new_errorf(args: fmt::Arguments<'_>) -> FormattedError {
    standalone(None, &[args.to_string()])
}

/// `"{scope}: {err}[ -> {details}]"`
#[must_use]
pub fn scoped_error_only<E: Into<BoxError>>(err: E, scope: &str, details: &[&str]) -> FormattedError {
    wrapped(err.into(), Some(scope), &owned(details))
}

/// [`scoped_error_only`] with the caller location appended as a detail.
#[track_caller]
#[must_use]
pub fn scoped_error<E: Into<BoxError>>(err: E, scope: &str, details: &[&str]) -> FormattedError {
    let mut details = owned(details);
    details.push(caller());
    wrapped(err.into(), Some(scope), &details)
}

/// One formatted detail plus the caller location.
#[track_caller]
#[must_use]
pub fn scoped_errorf<E: Into<BoxError>>(
    err: E,
    scope: &str,
    args: fmt::Arguments<'_>,
) -> FormattedError {
    let details = [args.to_string(), caller()];
    wrapped(err.into(), Some(scope), &details)
}

/// `"{scope}: {details}, [{file}:{line}]"`
#[track_caller]
#[must_use]
pub fn new_scoped_error(scope: &str, details: &[&str]) -> FormattedError {
    let mut details = owned(details);
    details.push(caller());
    standalone(Some(scope), &details)
}

#[track_caller]
#[must_use]
pub fn new_scoped_errorf(scope: &str, args: fmt::Arguments<'_>) -> FormattedError {
    standalone(Some(scope), &[args.to_string(), caller()])
}
