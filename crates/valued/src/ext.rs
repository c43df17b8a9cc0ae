//! Attach attributes at `?` call sites

use crate::attribute::AttributeValue;
use crate::valued::{BoxError, ValuedError};

/// Attribute attachment for `Result`; `Ok` values pass through untouched.
pub trait ResultExt<T> {
    /// # Errors
    ///
    /// Returns the error of `self`, annotated with `value`.
    fn attach(self, value: AttributeValue) -> Result<T, ValuedError>;

    /// # Errors
    ///
    /// Returns the error of `self`, annotated with `values`.
    fn attach_all<I>(self, values: I) -> Result<T, ValuedError>
    where
        I: IntoIterator<Item = AttributeValue>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn attach(self, value: AttributeValue) -> Result<T, ValuedError> {
        self.map_err(|err| ValuedError::wrap(err, [value]))
    }

    fn attach_all<I>(self, values: I) -> Result<T, ValuedError>
    where
        I: IntoIterator<Item = AttributeValue>,
    {
        self.map_err(|err| ValuedError::wrap(err, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valued::get_code;

    fn load(fail: bool) -> Result<u32, std::io::Error> {
        if fail {
            Err(std::io::Error::other("disk gone"))
        } else {
            Ok(7)
        }
    }

    fn service(fail: bool) -> Result<u32, ValuedError> {
        let value = load(fail).attach_all([AttributeValue::scope("storage")])?;
        Ok(value)
    }

    #[test]
    fn test_ok_passes_through() {
        assert_eq!(service(false).unwrap(), 7);
    }

    #[test]
    fn test_err_is_annotated_per_level() {
        let err = service(true)
            .attach(AttributeValue::code(503))
            .attach_all([AttributeValue::scope("storage"), AttributeValue::details(["retry later"])])
            .unwrap_err();
        assert_eq!(err.to_string(), "storage: disk gone -> retry later");
        assert_eq!(get_code(&err), 503);
    }
}
