use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

/// Common parameters filled in by the client when the caller leaves them out.
pub const DEFAULT_COMMON_PARAMS: [(&str, &str); 3] = [
    (Params::FORMAT, Format::Json.as_str()),
    (Params::VERSION, "2.0"),
    (Params::SIGN_METHOD, SignMethod::SecretWrapped.as_str()),
];

/// Parameters of a single API call.
///
/// Keys are unique and always iterate in ascending byte order, which is the
/// order the signature is computed in. Insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Remote operation name. Required.
    pub const METHOD: &'static str = "method";
    /// Response format (`json` or `xml`).
    pub const FORMAT: &'static str = "format";
    /// API version.
    pub const VERSION: &'static str = "v";
    /// Signature algorithm (`md5` or `hmac`).
    pub const SIGN_METHOD: &'static str = "sign_method";
    /// Application key. Owned by the client.
    pub const APP_KEY: &'static str = "app_key";
    /// Request time. Owned by the client.
    pub const TIMESTAMP: &'static str = "timestamp";
    /// Request signature. Owned by the client.
    pub const SIGN: &'static str = "sign";

    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a parameter set that only names the remote operation.
    pub fn method(method: impl Into<String>) -> Self {
        Self::new().with(Self::METHOD, method)
    }

    /// Builder-style [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a parameter, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fill every default common parameter the caller has not set.
    pub(crate) fn fill_defaults(&mut self) {
        for (key, value) in DEFAULT_COMMON_PARAMS {
            self.0
                .entry(key.to_owned())
                .or_insert_with(|| value.to_owned());
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Params {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<Params> for BTreeMap<String, String> {
    fn from(params: Params) -> Self {
        params.0
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Response format requested through the `format` parameter.
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// Parse a `format` parameter value.
    pub fn from_param(value: &str) -> Result<Self, ValidationError> {
        match value {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(ValidationError::UnsupportedFormat {
                value: other.to_owned(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Signature algorithm selected through the `sign_method` parameter.
///
/// [`SignMethod::KeyedDigest`] (HMAC-MD5) should be preferred for new
/// integrations. [`SignMethod::SecretWrapped`] is a plain MD5 over
/// `secret + canonical + secret`, which is open to length extension, and is
/// kept because it is the service's historical default.
pub enum SignMethod {
    /// `md5`: MD5 over the canonical string wrapped in the secret.
    #[serde(rename = "md5")]
    SecretWrapped,
    /// `hmac`: HMAC-MD5 over the canonical string, keyed by the secret.
    #[serde(rename = "hmac")]
    KeyedDigest,
}

impl SignMethod {
    /// Parse a `sign_method` parameter value.
    pub fn from_param(value: &str) -> Result<Self, ValidationError> {
        match value {
            "md5" => Ok(Self::SecretWrapped),
            "hmac" => Ok(Self::KeyedDigest),
            other => Err(ValidationError::UnsupportedSignMethod {
                value: other.to_owned(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SecretWrapped => "md5",
            Self::KeyedDigest => "hmac",
        }
    }
}

impl fmt::Display for SignMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
