//! Endpoint facade: one method per backend call.
//!
//! Methods take caller-validated input, build the matching [`ApiRequest`]
//! and hand it to the [`Transport`]. The only state they touch is the
//! session token, which the auth endpoints replace on success.

mod auth;
mod chat;
mod profile;
mod properties;
mod rentals;
mod upload;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::ApiResponse;
use crate::request::ApiRequest;
use crate::session::Session;
use crate::transport::Transport;

/// Typed client for the rental API.
///
/// Cheap to clone; clones share the HTTP connection pool and the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Transport,
}

impl ApiClient {
    /// Creates a client for `config` using `session` for authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig, session: Arc<Session>) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config, session)?,
        })
    }

    /// Returns the session.
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        self.transport.session()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Returns the id of the logged-in user, read from the token.
    #[must_use]
    pub fn current_user_id(&self) -> Option<String> {
        self.session().current_user_id()
    }

    async fn call<T: ApiResponse>(&self, request: ApiRequest) -> Result<T> {
        self.transport.execute(request).await
    }
}
