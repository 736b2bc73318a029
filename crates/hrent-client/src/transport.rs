//! HTTP transport and response interpretation.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{ApiResponse, ErrorResponse};
use crate::request::{ApiRequest, RequestBody};
use crate::session::Session;

/// Longest body excerpt included in decode-failure logs.
const LOG_PREVIEW_LEN: usize = 512;

/// Sends [`ApiRequest`]s and turns responses into typed results.
#[derive(Debug, Clone)]
pub struct Transport {
    config: ClientConfig,
    session: Arc<Session>,
    http_client: Client,
}

impl Transport {
    /// Creates a transport for `config`, authenticating with `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig, session: Arc<Session>) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http_client: builder.build()?,
            config,
            session,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the session used for authentication.
    #[must_use]
    pub const fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Sends `request` and decodes the response as `T`.
    ///
    /// Authenticated requests fail with [`Error::MissingCredential`] before
    /// anything is sent when the session holds no token.
    ///
    /// # Errors
    ///
    /// Returns an error on missing credentials, transport failure, a non-2xx
    /// status, or a body that does not decode as `T`.
    pub async fn execute<T: ApiResponse>(&self, mut request: ApiRequest) -> Result<T> {
        let token = if request.requires_auth() {
            Some(self.session.token().ok_or(Error::MissingCredential)?)
        } else {
            None
        };

        let url = request.url(&self.config.base_url)?;
        let path = request.display_path();
        debug!("{} {}", request.method(), path);

        let mut builder = self.http_client.request(request.method().clone(), url);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder = match request.take_body() {
            RequestBody::Empty => builder.header(CONTENT_TYPE, "application/json"),
            RequestBody::Json(bytes) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(bytes),
            RequestBody::Multipart(multipart) => builder
                .header(CONTENT_TYPE, multipart.content_type())
                .body(multipart.into_bytes()),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!("{} {} -> {}", request.method(), path, status.as_u16());

        interpret_response(status, &body)
    }
}

/// Classifies a response and decodes its body.
///
/// - 2xx with a body: decode as `T`.
/// - 2xx without a body: [`ApiResponse::from_empty`], else a decode error.
/// - anything else: the `{"message": ...}` envelope, falling back to a
///   generic message naming the status.
///
/// # Errors
///
/// Returns [`Error::Status`] for non-2xx responses and [`Error::Decode`] for
/// bodies that do not match `T`.
pub fn interpret_response<T: ApiResponse>(status: StatusCode, body: &[u8]) -> Result<T> {
    if !status.is_success() {
        return Err(status_error(status.as_u16(), body));
    }

    if body.is_empty() {
        return T::from_empty().ok_or_else(|| {
            Error::Decode(format!("empty response body (status {})", status.as_u16()))
        });
    }

    serde_json::from_slice(body).map_err(|e| {
        warn!(
            "Failed to decode response: {e}; body: {}",
            preview(body, LOG_PREVIEW_LEN)
        );
        Error::Decode(e.to_string())
    })
}

fn status_error(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(envelope) => Error::status(status, envelope.message),
        Err(_) => Error::status_fallback(status),
    }
}

fn preview(body: &[u8], max: usize) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() <= max {
        return text.into_owned();
    }
    let mut cut: String = text.chars().take(max).collect();
    cut.push('…');
    cut
}
