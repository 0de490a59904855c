//! Canonical serialization and request signatures.
//!
//! See <http://open.taobao.com/doc2/detail.htm?articleId=101617&docType=1&treeId=1>.

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};

use crate::domain::{Params, SignMethod};

type HmacMd5 = Hmac<Md5>;

/// Concatenate every key immediately followed by its value, keys in ascending
/// byte order, with no delimiter.
pub fn canonicalize(params: &Params) -> String {
    let capacity = params.iter().map(|(k, v)| k.len() + v.len()).sum();
    params
        .iter()
        .fold(String::with_capacity(capacity), |mut out, (key, value)| {
            out.push_str(key);
            out.push_str(value);
            out
        })
}

/// `md5` signature: upper-case hex MD5 of `secret + canonical + secret`.
pub fn sign_secret_wrapped(params: &Params, secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(secret.as_bytes());
    hasher.update(canonicalize(params).as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// `hmac` signature: upper-case hex HMAC-MD5 of the canonical string keyed by `secret`.
pub fn sign_keyed_digest(params: &Params, secret: &str) -> String {
    let mut mac =
        HmacMd5::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(canonicalize(params).as_bytes());
    hex::encode_upper(mac.finalize().into_bytes())
}

impl SignMethod {
    /// Sign `params` with `secret` using this algorithm.
    pub fn sign(self, params: &Params, secret: &str) -> String {
        match self {
            Self::SecretWrapped => sign_secret_wrapped(params, secret),
            Self::KeyedDigest => sign_keyed_digest(params, secret),
        }
    }
}
