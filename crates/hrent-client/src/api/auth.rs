//! Registration, login and logout.
//!
//! Passwordless: the server emails a one-time passcode (OTP) and the
//! verify calls exchange it for a bearer token.

use tracing::{info, warn};

use super::ApiClient;
use crate::error::Result;
use crate::models::requests::{LoginOtpRequest, VerifyOtpRequest};
use crate::models::{AuthResponse, GoogleAuth, MessageResponse, Registration};
use crate::request::ApiRequest;

impl ApiClient {
    /// Asks the server to email a registration OTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn send_registration_otp(
        &self,
        registration: &Registration,
    ) -> Result<MessageResponse> {
        let request = ApiRequest::post(&["auth", "register-send-otp"])
            .with_json(registration)?;
        self.call(request).await
    }

    /// Completes registration and stores the returned token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token cannot be stored.
    pub async fn verify_registration_otp(&self, email: &str, otp: &str) -> Result<AuthResponse> {
        let request = ApiRequest::post(&["auth", "register-verify-otp"])
            .with_json(&VerifyOtpRequest { email, otp })?;
        self.authenticate(request).await
    }

    /// Asks the server to email a login OTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn send_login_otp(&self, email: &str) -> Result<MessageResponse> {
        let request = ApiRequest::post(&["auth", "login-send-otp"])
            .with_json(&LoginOtpRequest { email })?;
        self.call(request).await
    }

    /// Completes login and stores the returned token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token cannot be stored.
    pub async fn verify_login_otp(&self, email: &str, otp: &str) -> Result<AuthResponse> {
        let request = ApiRequest::post(&["auth", "login-verify-otp"])
            .with_json(&VerifyOtpRequest { email, otp })?;
        self.authenticate(request).await
    }

    /// Registers or logs in with an identity from Google sign-in and stores
    /// the returned token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token cannot be stored.
    pub async fn google_auth(&self, identity: &GoogleAuth) -> Result<AuthResponse> {
        let request = ApiRequest::post(&["auth", "google-auth"]).with_json(identity)?;
        self.authenticate(request).await
    }

    /// Forgets the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token store cannot be cleared.
    pub fn logout(&self) -> Result<()> {
        self.session().set_token(None)?;
        info!("Logged out");
        Ok(())
    }

    /// Runs an auth call and adopts the token it returns.
    ///
    /// Any failure, including one to store the new token, leaves the
    /// previous token in place.
    async fn authenticate(&self, request: ApiRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self.call(request).await?;
        if let Err(e) = self.session().set_token(Some(&response.token)) {
            warn!("Server accepted the login but the token could not be stored: {e}");
            return Err(e.into());
        }
        info!("Authenticated as {}", response.user.email);
        Ok(response)
    }
}
