//! Signed request client for the Alidayu (Taobao TOP) SMS and voice notification REST API.
//!
//! The crate is split into a domain layer of plain types ([`Params`],
//! [`Credential`], [`Format`], [`SignMethod`]), a transport layer holding the
//! canonical signing string and the form encoding, and a small client layer
//! that prepares, posts and classifies a call.
//!
//! ```rust,no_run
//! use alidayu::{AlidayuClient, Credential, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), alidayu::AlidayuError> {
//!     let client = AlidayuClient::builder(Credential::new("app-key", "app-secret"))
//!         .use_https(true)
//!         .build()?;
//!     let params = Params::method("alibaba.aliqin.fc.sms.num.send")
//!         .with("sms_type", "normal")
//!         .with("sms_free_sign_name", "...")
//!         .with("sms_param", r#"{"code":"123456"}"#)
//!         .with("sms_template_code", "SMS_0000000")
//!         .with("rec_num", "13000000000");
//!     let outcome = client.execute(params).await?;
//!     println!("success: {}, body: {}", outcome.succeeded, outcome.raw_body);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    AlidayuClient, AlidayuClientBuilder, AlidayuError, BoxError, BoxFuture, HTTP_ENDPOINT,
    HTTPS_ENDPOINT, HttpRequest, HttpResponse, HttpTransport, TIMESTAMP_FORMAT,
};
pub use domain::{
    AppKey, AppSecret, Credential, DEFAULT_COMMON_PARAMS, Format, Params, ResponseOutcome,
    SignMethod, ValidationError,
};
pub use transport::{
    FORM_CONTENT_TYPE, SUCCESS_MARKER_JSON, SUCCESS_MARKER_XML, canonicalize, encode_form_body,
    is_success, sign_keyed_digest, sign_secret_wrapped, success_marker,
};

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<AlidayuClient>;
    let _ = assert_send_sync::<AlidayuError>;
    let _ = assert_send_sync::<Params>;
};
