//! Integration tests for error types

#[cfg(test)]
mod tests {
    use errfmt_errors::*;

    #[test]
    fn test_error_conversion() {
        let attr_err = AttributeError::NonPositiveCode { code: 0 };
        let err: Error = attr_err.into();
        assert!(matches!(err, Error::Attribute(_)));
    }

    #[test]
    fn test_error_display() {
        let err = AttributeError::TypeMismatch {
            kind: "code".into(),
            expected: "integer".into(),
            found: "text".into(),
        };
        assert_eq!(
            err.to_string(),
            "attribute code expects a integer payload, got text"
        );

        let err: Error = ConfigError::InvalidValue {
            field: "ERRFMT_CODE".into(),
            value: "abc".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "config error: invalid value for ERRFMT_CODE: abc"
        );
    }

    #[test]
    fn test_error_clone() {
        let err = ConfigError::NotFound {
            path: "/etc/errfmt.toml".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err = Error::io_with_path(&io_err, "/tmp/config.toml");
        assert!(matches!(
            err,
            Error::Io {
                kind: std::io::ErrorKind::PermissionDenied,
                path: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(ConfigError::ParseError { .. })));
    }
}
