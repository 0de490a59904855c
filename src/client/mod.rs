//! Client layer: prepares and signs parameters, posts them, classifies the reply.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::domain::{Credential, Format, Params, ResponseOutcome, SignMethod, ValidationError};
use crate::transport::{FORM_CONTENT_TYPE, encode_form_body, is_success};

/// Plaintext REST endpoint.
pub const HTTP_ENDPOINT: &str = "http://gw.api.taobao.com/router/rest";
/// TLS REST endpoint.
pub const HTTPS_ENDPOINT: &str = "https://eco.taobao.com/router/rest";

/// `timestamp` layout: local wall-clock time at second resolution, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully encoded form POST.
pub struct HttpRequest {
    pub url: String,
    pub content_type: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a POST and reads the whole response body.
///
/// Implementations must send `request.content_type` as the `Content-Type`
/// header. Timeouts, retries and connection reuse are up to the
/// implementation; the client adds none of its own.
pub trait HttpTransport: Send + Sync {
    fn post<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&request.url)
                .header(reqwest::header::CONTENT_TYPE, request.content_type)
                .body(request.body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`AlidayuClient`].
pub enum AlidayuError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc), cause attached.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The credential or the parameters were rejected before anything was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`AlidayuClient`].
///
/// Use this when you need HTTPS, a custom endpoint, timeout or user-agent, or
/// your own [`HttpTransport`].
pub struct AlidayuClientBuilder {
    credential: Credential,
    use_https: bool,
    http_endpoint: String,
    https_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl AlidayuClientBuilder {
    /// Create a builder targeting the plaintext endpoint with no timeout/user-agent override.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            use_https: false,
            http_endpoint: HTTP_ENDPOINT.to_owned(),
            https_endpoint: HTTPS_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Post to the TLS endpoint instead of the plaintext one.
    pub fn use_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Override the plaintext endpoint URL.
    pub fn http_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.http_endpoint = endpoint.into();
        self
    }

    /// Override the TLS endpoint URL.
    pub fn https_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.https_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is installed.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is installed.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send requests through `transport` instead of the built-in reqwest client.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build an [`AlidayuClient`].
    pub fn build(self) -> Result<AlidayuClient, AlidayuError> {
        let endpoint = if self.use_https {
            self.https_endpoint
        } else {
            self.http_endpoint
        };

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| AlidayuError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client }) as Arc<dyn HttpTransport>
            }
        };

        Ok(AlidayuClient {
            credential: self.credential,
            endpoint,
            http,
        })
    }
}

impl fmt::Debug for AlidayuClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlidayuClientBuilder")
            .field("credential", &self.credential)
            .field("use_https", &self.use_https)
            .field("http_endpoint", &self.http_endpoint)
            .field("https_endpoint", &self.https_endpoint)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

#[derive(Clone)]
/// Alidayu REST client.
///
/// Every call takes its own [`Params`], fills in the common parameters, signs
/// them with the credential's secret and posts them as a form. The client holds
/// no per-call state, so clones can be used from many tasks at once.
pub struct AlidayuClient {
    credential: Credential,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl AlidayuClient {
    /// Create a client for the plaintext endpoint.
    ///
    /// For more customization, use [`AlidayuClient::builder`].
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            endpoint: HTTP_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credential: Credential) -> AlidayuClientBuilder {
        AlidayuClientBuilder::new(credential)
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Complete and sign `params` using the current local time.
    ///
    /// See [`AlidayuClient::prepare_at`].
    pub fn prepare(&self, params: Params) -> Result<Params, ValidationError> {
        self.prepare_at(params, Local::now().naive_local())
    }

    /// Complete and sign `params`, stamping them with `now`.
    ///
    /// - fails if the credential has an empty key or secret,
    /// - fails if `method` is missing,
    /// - fills `format`, `v` and `sign_method` when absent,
    /// - overwrites `app_key` and `timestamp`,
    /// - fails on a `format` other than `json`/`xml`,
    /// - signs with the selected `sign_method` and stores the result as `sign`.
    pub fn prepare_at(
        &self,
        mut params: Params,
        now: NaiveDateTime,
    ) -> Result<Params, ValidationError> {
        self.credential.validate()?;

        if !params.contains_key(Params::METHOD) {
            return Err(ValidationError::MissingMethod);
        }

        params.fill_defaults();
        params.insert(Params::APP_KEY, self.credential.app_key());
        params.insert(Params::TIMESTAMP, now.format(TIMESTAMP_FORMAT).to_string());

        Format::from_param(params.get(Params::FORMAT).unwrap_or_default())?;
        let sign_method =
            SignMethod::from_param(params.get(Params::SIGN_METHOD).unwrap_or_default())?;

        params.remove(Params::SIGN);
        let sign = sign_method.sign(&params, self.credential.app_secret());
        params.insert(Params::SIGN, sign);

        Ok(params)
    }

    /// Prepare `params` and post them, returning the raw HTTP response.
    ///
    /// Any HTTP status is returned as-is; only transport failures are errors.
    ///
    /// Errors:
    /// - [`AlidayuError::Validation`] when [`AlidayuClient::prepare`] rejects the call,
    /// - [`AlidayuError::Transport`] when the request could not be completed.
    pub async fn submit(&self, params: Params) -> Result<HttpResponse, AlidayuError> {
        let prepared = self.prepare(params)?;
        self.post_prepared(&prepared).await
    }

    /// Prepare, post and classify a call.
    ///
    /// `succeeded` is true iff the body contains `"success":true` (json) or
    /// `<success>true</success>` (xml). The raw body is always returned.
    pub async fn execute(&self, params: Params) -> Result<ResponseOutcome, AlidayuError> {
        let prepared = self.prepare(params)?;
        let response = self.post_prepared(&prepared).await?;
        let succeeded = is_success(prepared.get(Params::FORMAT), &response.body);

        debug!(status = response.status, succeeded, "classified response");

        Ok(ResponseOutcome {
            succeeded,
            status: response.status,
            raw_body: response.body,
        })
    }

    async fn post_prepared(&self, prepared: &Params) -> Result<HttpResponse, AlidayuError> {
        debug!(
            endpoint = %self.endpoint,
            method = prepared.get(Params::METHOD).unwrap_or_default(),
            "submitting request"
        );

        let request = HttpRequest {
            url: self.endpoint.clone(),
            content_type: FORM_CONTENT_TYPE,
            body: encode_form_body(prepared),
        };

        self.http
            .post(request)
            .await
            .map_err(AlidayuError::Transport)
    }
}
