//! Transport layer: signing and wire-format details.

mod form;
mod sign;

pub use form::{
    FORM_CONTENT_TYPE, SUCCESS_MARKER_JSON, SUCCESS_MARKER_XML, encode_form_body, is_success,
    success_marker,
};
pub use sign::{canonicalize, sign_keyed_digest, sign_secret_wrapped};
