//! Client layer: authenticates, dispatches and decodes requests.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AccountSid, ApiKeySid, AuthToken, Payload, Request, RestException, TwilioResponse,
    ValidationError,
};
use crate::transport::{FORM_CONTENT_TYPE, Method, build_request, decode_response};

const DEFAULT_API_ROOT: &str = "https://api.twilio.com";
const DEFAULT_API_VERSION: &str = "2010-04-01";

#[derive(Debug, Clone, Copy)]
struct HttpRequest<'a> {
    method: Method,
    url: &'a str,
    body: Option<&'a str>,
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest<'_>,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        request: HttpRequest<'_>,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let builder = match request.method {
            Method::Get => self.client.get(request.url),
            Method::Post => self.client.post(request.url),
            Method::Delete => self.client.delete(request.url),
        };
        let mut builder = builder
            .basic_auth(request.username, Some(request.password))
            .header(reqwest::header::ACCEPT, "*/*");
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body.to_owned());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug)]
/// How requests authenticate against the account.
pub enum Auth {
    /// The account sid is the username, the auth token the password.
    AuthToken(AuthToken),
    /// An API key sid is the username, its secret the password.
    ApiKey { key_sid: ApiKeySid, secret: AuthToken },
}

#[derive(Debug)]
/// Account sid plus the secret used for HTTP basic authentication.
///
/// Secrets are held as [`secrecy::SecretString`] and never appear in `Debug` output.
pub struct Credentials {
    account_sid: AccountSid,
    auth: Auth,
}

impl Credentials {
    /// Authenticate with the account's own auth token.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_sid: AccountSid::new(account_sid)?,
            auth: Auth::AuthToken(AuthToken::new(auth_token)?),
        })
    }

    /// Authenticate with an API key; requests still address `account_sid`.
    pub fn api_key(
        account_sid: impl Into<String>,
        key_sid: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_sid: AccountSid::new(account_sid)?,
            auth: Auth::ApiKey {
                key_sid: ApiKeySid::new(key_sid)?,
                secret: AuthToken::new(key_secret)?,
            },
        })
    }

    /// Two parts are `[account_sid, auth_token]`; three are
    /// `[account_sid, api_key_sid, api_key_secret]`.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Result<Self, ValidationError> {
        match parts {
            [account_sid, auth_token] => Self::new(account_sid.as_ref(), auth_token.as_ref()),
            [account_sid, key_sid, key_secret] => Self::api_key(
                account_sid.as_ref(),
                key_sid.as_ref(),
                key_secret.as_ref(),
            ),
            _ => Err(ValidationError::CredentialArity {
                actual: parts.len(),
            }),
        }
    }

    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    fn basic_auth(&self) -> (&str, &str) {
        match &self.auth {
            Auth::AuthToken(token) => (self.account_sid.as_str(), token.expose()),
            Auth::ApiKey { key_sid, secret } => (key_sid.as_str(), secret.expose()),
        }
    }
}

/// What to do with a response body that cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Log a warning and return the envelope with [`Payload::Empty`].
    #[default]
    Lenient,
    /// Fail with [`TwilioError::Parse`].
    Strict,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TwilioClient`].
pub enum TwilioError {
    /// A descriptor or credential failed validation; nothing was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Twilio answered with a `RestException`.
    ///
    /// `response` is the full envelope, with the HTTP status recorded.
    #[error("{exception}")]
    Api {
        exception: RestException,
        response: Box<TwilioResponse>,
    },

    /// Response body could not be decoded (only with [`DecodePolicy::Strict`]).
    #[error("parse error (HTTP {status}): {source}")]
    Parse {
        status: u16,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl TwilioError {
    /// Twilio error code, for [`TwilioError::Api`].
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Api { exception, .. } => Some(exception.code),
            _ => None,
        }
    }

    /// The envelope Twilio returned, for [`TwilioError::Api`].
    pub fn response(&self) -> Option<&TwilioResponse> {
        match self {
            Self::Api { response, .. } => Some(response.as_ref()),
            _ => None,
        }
    }
}

#[derive(Debug)]
/// Builder for [`TwilioClient`].
///
/// Use this when you need to customize the API root, version, timeout, or user-agent.
pub struct TwilioClientBuilder {
    credentials: Credentials,
    api_root: String,
    api_version: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    decode_policy: DecodePolicy,
}

impl TwilioClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_root: DEFAULT_API_ROOT.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            timeout: None,
            user_agent: None,
            decode_policy: DecodePolicy::default(),
        }
    }

    /// Override the API host (`https://api.twilio.com`).
    pub fn api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Override the API version path segment (`2010-04-01`).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn decode_policy(mut self, decode_policy: DecodePolicy) -> Self {
        self.decode_policy = decode_policy;
        self
    }

    /// Build a [`TwilioClient`].
    pub fn build(self) -> Result<TwilioClient, TwilioError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TwilioError::Transport(Box::new(err)))?;

        Ok(TwilioClient {
            credentials: Arc::new(self.credentials),
            api_base: api_base(&self.api_root, &self.api_version),
            decode_policy: self.decode_policy,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn api_base(api_root: &str, api_version: &str) -> String {
    format!(
        "{}/{}",
        api_root.trim_end_matches('/'),
        api_version.trim_matches('/')
    )
}

#[derive(Clone)]
/// High-level Twilio REST client.
///
/// One [`TwilioClient::request`] call issues one blocking HTTP request. The client is
/// cheap to clone and can be shared across threads; it must not be used from inside an
/// async runtime.
pub struct TwilioClient {
    credentials: Arc<Credentials>,
    api_base: String,
    decode_policy: DecodePolicy,
    http: Arc<dyn HttpTransport>,
}

impl TwilioClient {
    /// Create a client with the default API root and version.
    ///
    /// For more customization, use [`TwilioClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
            api_base: api_base(DEFAULT_API_ROOT, DEFAULT_API_VERSION),
            decode_policy: DecodePolicy::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::blocking::Client::new(),
            }),
        }
    }

    /// Create a client from two or three credential strings, see
    /// [`Credentials::from_parts`].
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Result<Self, TwilioError> {
        Ok(Self::new(Credentials::from_parts(parts)?))
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> TwilioClientBuilder {
        TwilioClientBuilder::new(credentials)
    }

    pub fn account_sid(&self) -> &AccountSid {
        self.credentials.account_sid()
    }

    /// Send one request and decode Twilio's answer.
    ///
    /// Errors:
    /// - [`TwilioError::Validation`] when a required path field is empty (no HTTP call is made),
    /// - [`TwilioError::Transport`] when the request could not be completed,
    /// - [`TwilioError::Api`] when Twilio returned a `RestException`, whatever the HTTP status,
    /// - [`TwilioError::Parse`] for an undecodable body under [`DecodePolicy::Strict`].
    pub fn request(&self, request: impl Into<Request>) -> Result<TwilioResponse, TwilioError> {
        let request = request.into();
        let name = request.name();
        let outbound = build_request(
            &self.api_base,
            &request,
            self.credentials.account_sid().as_str(),
        )?;
        let (username, password) = self.credentials.basic_auth();

        tracing::debug!(request = name, method = %outbound.method, url = %outbound.url, "sending request");

        let response = self
            .http
            .send(HttpRequest {
                method: outbound.method,
                url: &outbound.url,
                body: outbound.body.as_deref(),
                username,
                password,
            })
            .map_err(|err| {
                tracing::error!(request = name, "request failed: {err}");
                TwilioError::Transport(err)
            })?;

        let status = response.status;
        tracing::debug!(request = name, status, bytes = response.body.len(), "received response");

        let payload = match decode_response(outbound.format, status, response.body) {
            Ok(payload) => payload,
            Err(err) => match self.decode_policy {
                DecodePolicy::Lenient => {
                    tracing::warn!(request = name, status, "undecodable response body: {err}");
                    Payload::Empty
                }
                DecodePolicy::Strict => {
                    return Err(TwilioError::Parse {
                        status,
                        source: Box::new(err),
                    });
                }
            },
        };

        let response = TwilioResponse::new(status, payload);
        if let Some(exception) = response.exception() {
            return Err(TwilioError::Api {
                exception: exception.clone(),
                response: Box::new(response),
            });
        }

        Ok(response)
    }
}
