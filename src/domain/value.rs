use std::fmt;

use serde::Deserialize;

use crate::domain::request::Params;
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
/// Public application key (`app_key`).
///
/// Kept exactly as provided: the value is signed, so it is never trimmed.
pub struct AppKey(String);

impl AppKey {
    /// Form field name of the application key (`app_key`).
    pub const FIELD: &'static str = Params::APP_KEY;

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
/// Application secret used as the signing key.
///
/// Never sent over the wire and hidden from `Debug` output.
pub struct AppSecret(String);

impl AppSecret {
    /// Name used when reporting an empty secret (`app_secret`).
    pub const FIELD: &'static str = "app_secret";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
/// Alidayu application credentials (`app_key` + `app_secret`).
///
/// Emptiness is checked when a request is prepared (see
/// [`Credential::validate`]), not at construction time, so a credential can be
/// deserialized from configuration before it is complete.
pub struct Credential {
    app_key: AppKey,
    app_secret: AppSecret,
}

impl Credential {
    /// Create a credential from an application key and secret.
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: AppKey::new(app_key),
            app_secret: AppSecret::new(app_secret),
        }
    }

    /// Borrow the public application key.
    pub fn app_key(&self) -> &str {
        self.app_key.as_str()
    }

    /// Borrow the application secret.
    pub fn app_secret(&self) -> &str {
        self.app_secret.as_str()
    }

    /// Whether both the key and the secret are non-empty.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check that both the key and the secret are non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.app_key.is_empty() {
            return Err(ValidationError::Empty {
                field: AppKey::FIELD,
            });
        }
        if self.app_secret.is_empty() {
            return Err(ValidationError::Empty {
                field: AppSecret::FIELD,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_the_empty_field() {
        assert_eq!(
            Credential::new("", "secret").validate(),
            Err(ValidationError::Empty { field: "app_key" })
        );
        assert_eq!(
            Credential::new("key", "").validate(),
            Err(ValidationError::Empty {
                field: "app_secret"
            })
        );
        assert!(Credential::new("key", "secret").is_valid());
    }

    #[test]
    fn app_key_field_is_the_wire_key() {
        assert_eq!(AppKey::FIELD, Params::APP_KEY);
        assert_eq!(AppSecret::FIELD, "app_secret");
    }

    #[test]
    fn newtypes_preserve_whitespace() {
        assert_eq!(AppKey::new(" key ").as_str(), " key ");
        assert_eq!(AppSecret::new(" secret ").as_str(), " secret ");

        let credential = Credential::new(" key ", " secret ");
        assert_eq!(credential.app_key(), " key ");
        assert_eq!(credential.app_secret(), " secret ");
    }

    #[test]
    fn newtypes_report_emptiness() {
        assert!(AppKey::new("").is_empty());
        assert!(!AppKey::new(" ").is_empty());
        assert!(AppSecret::new("").is_empty());
    }

    #[test]
    fn debug_output_hides_secret() {
        assert_eq!(
            format!("{:?}", AppSecret::new("topsecret")),
            "AppSecret(<redacted>)"
        );
        let rendered = format!("{:?}", Credential::new("key", "topsecret"));
        assert!(rendered.contains("key"));
        assert!(!rendered.contains("topsecret"));
    }

    #[test]
    fn deserializes_from_config() {
        let credential: Credential =
            serde_json::from_str(r#"{"app_key":"12345","app_secret":"abcdef"}"#).unwrap();
        assert_eq!(credential, Credential::new("12345", "abcdef"));
    }
}
