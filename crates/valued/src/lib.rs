#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Attribute-bearing errors for errfmt
//!
//! A [`ValuedError`] wraps a cause together with an optional scope label,
//! a de-duplicated list of details and two numeric codes, and renders them
//! into one message:
//!
//! ```text
//! [{scope}: ]{cause}[ -> {details joined by ", "}]
//! ```
//!
//! Attaching to an error that is already valued goes through [`merge::plan`]:
//! repeating the same scope is a no-op, details under a stable scope
//! accumulate, and a different scope pushes a new layer so the old one stays
//! visible inside. `source()` always leads back to the untouched original.

pub mod attribute;
pub mod attributes;
pub mod ext;
pub mod merge;
pub mod render;
pub mod valued;

pub use attribute::{
    merge_details, validate_code, AttributeKind, AttributeValue, Payload, CODE_MISSING,
};
pub use attributes::{Attributes, SettledSet};
pub use ext::ResultExt;
pub use merge::{plan, Rewrap};
pub use render::render;
pub use valued::{
    attach_attribute, attach_attributes, chain, find_valued, get_code, get_public_code,
    get_scope, BoxError, Cause, MessageError, ValuedError,
};
