#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error formatters for errfmt
//!
//! Boundary-level entry points built on top of `errfmt-valued`: string-only
//! wrap helpers, scoped helpers that record the call site, and the
//! [`ErrorFormatter`] service with plain, scoped and valued implementations.

pub mod formatted;
pub mod service;

pub use formatted::{
    error, error_only, errorf, new_error, new_errorf, new_scoped_error, new_scoped_errorf,
    scoped_error, scoped_error_only, scoped_errorf, FormattedError,
};
pub use service::{ErrorFormatter, PlainFormatter, ScopedFormatter, ValuedFormatter};
