use super::ApiClient;
use crate::error::Result;
use crate::models::{ProfileUpdate, UserProfileResponse};
use crate::request::ApiRequest;

impl ApiClient {
    /// Fetches the logged-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn profile(&self) -> Result<UserProfileResponse> {
        self.call(ApiRequest::get(&["user", "profile"]).authenticated())
            .await
    }

    /// Updates the logged-in user's name.
    ///
    /// # Errors
    ///
    /// Returns an error if logged out or the request fails.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfileResponse> {
        self.call(
            ApiRequest::put(&["user", "profile"])
                .with_json(update)?
                .authenticated(),
        )
        .await
    }
}
