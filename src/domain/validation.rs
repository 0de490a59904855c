use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingMethod,
    UnsupportedFormat { value: String },
    UnsupportedSignMethod { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingMethod => write!(f, "no method specified"),
            Self::UnsupportedFormat { value } => {
                write!(f, "unsupported format: {value:?} (expected \"json\" or \"xml\")")
            }
            Self::UnsupportedSignMethod { value } => {
                write!(
                    f,
                    "unsupported sign_method: {value:?} (expected \"md5\" or \"hmac\")"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "app_key" };
        assert_eq!(err.to_string(), "app_key must not be empty");

        assert_eq!(
            ValidationError::MissingMethod.to_string(),
            "no method specified"
        );

        let err = ValidationError::UnsupportedFormat {
            value: "yaml".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported format: \"yaml\" (expected \"json\" or \"xml\")"
        );

        let err = ValidationError::UnsupportedSignMethod {
            value: "sha1".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported sign_method: \"sha1\" (expected \"md5\" or \"hmac\")"
        );
    }
}
